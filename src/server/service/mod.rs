//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce ownership
//! and route consistency, translate lost concurrency races into API errors and keep
//! the talk tag cache in step with writes.

pub mod auth;
pub mod camp;
pub mod operations;
pub mod sample_camp;
pub mod speaker;
pub mod talk;
pub mod talk_tag;
