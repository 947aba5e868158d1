use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000008_create_speaker_table::Speaker;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Talk::Table)
                    .if_not_exists()
                    .col(pk_auto(Talk::Id))
                    .col(integer(Talk::SpeakerId))
                    .col(string(Talk::Title))
                    .col(text(Talk::Abstract))
                    .col(string(Talk::Category))
                    .col(string_null(Talk::Level))
                    .col(string_null(Talk::Prerequisites))
                    .col(timestamp_with_time_zone(Talk::StartingTime))
                    .col(string_null(Talk::Room))
                    .col(blob(Talk::RowVersion))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talk_speaker_id")
                            .from(Talk::Table, Talk::SpeakerId)
                            .to(Speaker::Table, Speaker::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Talk::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Talk {
    Table,
    Id,
    SpeakerId,
    Title,
    Abstract,
    Category,
    Level,
    Prerequisites,
    StartingTime,
    Room,
    RowVersion,
}
