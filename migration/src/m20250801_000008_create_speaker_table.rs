use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250801_000001_create_camp_user_table::CampUser, m20250801_000007_create_camp_table::Camp,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Speaker::Table)
                    .if_not_exists()
                    .col(pk_auto(Speaker::Id))
                    .col(integer(Speaker::CampId))
                    .col(integer_null(Speaker::UserId))
                    .col(string(Speaker::Name))
                    .col(string_null(Speaker::CompanyName))
                    .col(string_null(Speaker::PhoneNumber))
                    .col(string_null(Speaker::WebsiteUrl))
                    .col(string_null(Speaker::TwitterName))
                    .col(string_null(Speaker::GithubName))
                    .col(text(Speaker::Bio))
                    .col(string_null(Speaker::HeadShotUrl))
                    .col(blob(Speaker::RowVersion))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_speaker_camp_id")
                            .from(Speaker::Table, Speaker::CampId)
                            .to(Camp::Table, Camp::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_speaker_user_id")
                            .from(Speaker::Table, Speaker::UserId)
                            .to(CampUser::Table, CampUser::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Speaker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Speaker {
    Table,
    Id,
    CampId,
    UserId,
    Name,
    CompanyName,
    PhoneNumber,
    WebsiteUrl,
    TwitterName,
    GithubName,
    Bio,
    HeadShotUrl,
    RowVersion,
}
