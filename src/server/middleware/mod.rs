//! Request extractors and guards shared by the controllers.

pub mod auth;
pub mod conditional;
pub mod json;
pub mod link;
pub mod session;
pub mod version;

#[cfg(test)]
mod test;
