//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Writes that touch several rows run in one transaction, and updates are compare-and-swap
//! on the row version.

pub mod camp;
pub mod speaker;
pub mod talk;
pub mod user;

#[cfg(test)]
mod test;
