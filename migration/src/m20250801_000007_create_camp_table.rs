use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000006_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Camp::Table)
                    .if_not_exists()
                    .col(pk_auto(Camp::Id))
                    .col(string_uniq(Camp::Moniker))
                    .col(string(Camp::Name))
                    .col(date(Camp::EventDate))
                    .col(integer(Camp::Length))
                    .col(text(Camp::Description))
                    .col(integer_null(Camp::LocationId))
                    .col(blob(Camp::RowVersion))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_camp_location_id")
                            .from(Camp::Table, Camp::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Camp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Camp {
    Table,
    Id,
    Moniker,
    Name,
    EventDate,
    Length,
    Description,
    LocationId,
    RowVersion,
}
