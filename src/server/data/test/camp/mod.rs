use crate::server::{
    data::camp::CampRepository,
    model::camp::{CampParams, Location},
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_moniker;
mod get_all;
mod moniker_exists;
mod update;
