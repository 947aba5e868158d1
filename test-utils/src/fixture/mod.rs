//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and as default
//! values for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let camp = fixture::camp::entity();
//!
//! // Create with custom fields
//! let camp = fixture::camp::entity_builder()
//!     .moniker("atl2026")
//!     .length(2)
//!     .build();
//! ```

pub mod camp;
pub mod speaker;
pub mod talk;
pub mod user;

pub use camp::{entity as camp_entity, entity_builder as camp_entity_builder};
pub use speaker::{entity as speaker_entity, entity_builder as speaker_entity_builder};
pub use talk::{entity as talk_entity, entity_builder as talk_entity_builder};
pub use user::entity as user_entity;
