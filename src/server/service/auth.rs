//! Credential verification and identity seeding.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::SeedUser,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{
        CreateUserParams, Credentials, User, ADMIN_ROLE, CLAIM_GRANTED, IS_ADMIN_CLAIM,
        SUPER_USER_CLAIM,
    },
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a user name and password pair.
    ///
    /// Unknown users and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No such user or wrong password
    /// - `Err(AppError::DbErr(_))` - Database error during lookup
    pub async fn login(&self, credentials: Credentials) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, hash)) = repo
            .find_with_password_hash(&credentials.user_name)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates the configured seed user unless a user with that name exists.
    ///
    /// The user joins the `Admin` role (which carries `IsAdmin=True`) and receives the
    /// `SuperUser=True` claim directly.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was created
    /// - `Ok(false)` - A user with that name already existed; nothing changed
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn seed(&self, seed: &SeedUser) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_user_name(&seed.user_name).await?.is_some() {
            return Ok(false);
        }

        let role_id = repo.ensure_role(ADMIN_ROLE).await?;
        repo.add_role_claim(role_id, IS_ADMIN_CLAIM, CLAIM_GRANTED)
            .await?;

        let user = repo
            .create(CreateUserParams {
                user_name: seed.user_name.clone(),
                password_hash: hash_password(&seed.password),
                email: seed.email.clone(),
                first_name: seed.first_name.clone(),
                last_name: seed.last_name.clone(),
            })
            .await?;

        repo.add_to_role(user.id, role_id).await?;
        repo.add_claim(user.id, SUPER_USER_CLAIM, CLAIM_GRANTED)
            .await?;

        tracing::info!("Seeded user {}", user.user_name);

        Ok(true)
    }
}
