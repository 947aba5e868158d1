//! SeaORM entities for the code camp database.

pub mod prelude;

pub mod camp;
pub mod camp_user;
pub mod location;
pub mod role;
pub mod role_claim;
pub mod speaker;
pub mod talk;
pub mod user_claim;
pub mod user_role;
