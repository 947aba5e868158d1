//! Camp user fixtures for creating in-memory test data.

use entity::camp_user;

/// Default user name.
pub const DEFAULT_USER_NAME: &str = "wghglory";

/// Creates a camp user entity model with default values.
///
/// The password hash is a placeholder that never verifies; factories that need a
/// working login set a real hash.
pub fn entity() -> camp_user::Model {
    camp_user::Model {
        id: 1,
        user_name: DEFAULT_USER_NAME.to_string(),
        email: Some("hello@gmail.com".to_string()),
        password_hash: String::new(),
        first_name: Some("Guanghui".to_string()),
        last_name: Some("Wang".to_string()),
    }
}
