use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000001_create_camp_user_table::CampUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserClaim::Table)
                    .if_not_exists()
                    .col(pk_auto(UserClaim::Id))
                    .col(integer(UserClaim::UserId))
                    .col(string(UserClaim::ClaimType))
                    .col(string(UserClaim::ClaimValue))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_claim_user_id")
                            .from(UserClaim::Table, UserClaim::UserId)
                            .to(CampUser::Table, CampUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserClaim::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserClaim {
    Table,
    Id,
    UserId,
    ClaimType,
    ClaimValue,
}
