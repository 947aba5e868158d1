//! Wire-level DTOs shared by every API endpoint.
//!
//! These are the JSON shapes clients send and receive. Field names are camelCase on
//! the wire. Server-side domain models convert to and from these at the controller
//! boundary.

pub mod api;
pub mod auth;
pub mod camp;
pub mod patch;
pub mod speaker;
pub mod talk;
