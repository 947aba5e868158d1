//! Small self-contained helpers used across layers.

pub mod password;
pub mod patch;
pub mod validate;
