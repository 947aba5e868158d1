use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampUser::Table)
                    .if_not_exists()
                    .col(pk_auto(CampUser::Id))
                    .col(string_uniq(CampUser::UserName))
                    .col(string_null(CampUser::Email))
                    .col(string(CampUser::PasswordHash))
                    .col(string_null(CampUser::FirstName))
                    .col(string_null(CampUser::LastName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampUser {
    Table,
    Id,
    UserName,
    Email,
    PasswordHash,
    FirstName,
    LastName,
}
