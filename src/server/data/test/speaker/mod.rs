use crate::server::{
    data::speaker::SpeakerRepository,
    model::{row_version::RowVersion, speaker::CreateSpeakerParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod delete;
mod get_by_camp;
mod get_by_id;
mod update;
