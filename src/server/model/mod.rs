//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Mapping to DTOs takes an explicit `LinkContext` so self URLs reflect the current request.

pub mod camp;
pub mod link;
pub mod row_version;
pub mod speaker;
pub mod talk;
pub mod user;
