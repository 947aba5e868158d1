use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, ADMIN_ROLE, CLAIM_GRANTED, IS_ADMIN_CLAIM, SUPER_USER_CLAIM},
    util::password::hash_password,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_password_hash;
mod has_claim;
mod roles;
