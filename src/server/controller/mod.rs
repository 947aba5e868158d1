//! HTTP request handlers.
//!
//! Controllers resolve the caller, check access, parse the payload, delegate to a
//! service and map the result to a DTO. Access checks always run before the body is
//! parsed, so an unauthorized caller never learns whether its payload was valid.

pub mod auth;
pub mod camp;
pub mod operations;
pub mod param;
pub mod speaker;
pub mod talk;

#[cfg(test)]
mod test;
