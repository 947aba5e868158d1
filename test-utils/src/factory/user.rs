//! User factory for creating test camp users and their claims.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .user_name("wghglory")
///     .password_hash(hash_password("secret"))
///     .claim("SuperUser", "True")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_name: String,
    password_hash: String,
    claims: Vec<(String, String)>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"user{id}"` where id is auto-incremented
    /// - password_hash: empty (never verifies)
    /// - no claims
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_name: format!("user{}", id),
            password_hash: String::new(),
            claims: Vec::new(),
        }
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Grants a claim directly to the user.
    pub fn claim(mut self, claim_type: impl Into<String>, claim_value: impl Into<String>) -> Self {
        self.claims.push((claim_type.into(), claim_value.into()));
        self
    }

    /// Builds and inserts the user entity and its claims into the database.
    ///
    /// # Returns
    /// - `Ok(entity::camp_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::camp_user::Model, DbErr> {
        let user = entity::camp_user::ActiveModel {
            user_name: ActiveValue::Set(self.user_name),
            email: ActiveValue::Set(None),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(None),
            last_name: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (claim_type, claim_value) in self.claims {
            entity::user_claim::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                claim_type: ActiveValue::Set(claim_type),
                claim_value: ActiveValue::Set(claim_value),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::camp_user::Model, DbErr> {
    UserFactory::new(db).build().await
}
