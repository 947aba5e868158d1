use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(string_null(Location::Address1))
                    .col(string_null(Location::Address2))
                    .col(string_null(Location::Address3))
                    .col(string_null(Location::CityTown))
                    .col(string_null(Location::StateProvince))
                    .col(string_null(Location::PostalCode))
                    .col(string_null(Location::Country))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    Address1,
    Address2,
    Address3,
    CityTown,
    StateProvince,
    PostalCode,
    Country,
}
