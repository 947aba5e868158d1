use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::{ADMIN_ROLE, CLAIM_GRANTED, SUPER_USER_CLAIM},
};
use test_utils::{builder::TestBuilder, factory};
