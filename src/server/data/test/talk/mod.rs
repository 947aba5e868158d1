use crate::server::{
    data::talk::TalkRepository,
    model::{row_version::RowVersion, talk::CreateTalkParams},
};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod delete;
mod get_by_id;
mod get_by_speaker;
mod update;
