use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000002_create_role_table::Role;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleClaim::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleClaim::Id))
                    .col(integer(RoleClaim::RoleId))
                    .col(string(RoleClaim::ClaimType))
                    .col(string(RoleClaim::ClaimValue))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_claim_role_id")
                            .from(RoleClaim::Table, RoleClaim::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleClaim::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleClaim {
    Table,
    Id,
    RoleId,
    ClaimType,
    ClaimValue,
}
