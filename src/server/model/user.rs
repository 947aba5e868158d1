//! User domain models and parameters.
//!
//! Provides the identity-store user, the claim names checked by access guards, and
//! parameter types for creating users during seeding.

use crate::{
    model::auth::{CredentialDto, UserDto},
    server::{
        error::validation::ValidationErrors,
        util::validate::{Rules, Validate},
    },
};

/// Claim granting access to operations endpoints.
pub const SUPER_USER_CLAIM: &str = "SuperUser";
/// Claim attached to the `Admin` role by the identity seed.
pub const IS_ADMIN_CLAIM: &str = "IsAdmin";
/// Value a flag-style claim must carry to count as granted.
pub const CLAIM_GRANTED: &str = "True";
/// Role created by the identity seed.
pub const ADMIN_ROLE: &str = "Admin";

/// User account from the identity store.
///
/// The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::camp_user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Parameters for inserting a user with an already hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_name: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Validated login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    pub fn from_dto(dto: CredentialDto) -> Result<Self, ValidationErrors> {
        dto.validate()?;

        match (dto.user_name, dto.password) {
            (Some(user_name), Some(password)) => Ok(Self {
                user_name,
                password,
            }),
            _ => Err(ValidationErrors::malformed("Credentials are incomplete")),
        }
    }
}

impl Validate for CredentialDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Rules::new()
            .required("userName", self.user_name.as_deref())
            .required("password", self.password.as_deref())
            .finish()
    }
}
