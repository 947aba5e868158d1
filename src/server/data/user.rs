//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for the identity store: users, their
//! roles, and the claims granted to either. Claims are checked both directly on the
//! user and through every role the user belongs to.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for users, roles and claims.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::CampUser::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact user name.
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_with_password_hash(user_name)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user by user name together with the stored password hash.
    ///
    /// Only used for credential verification.
    ///
    /// # Returns
    /// - `Ok(Some((User, hash)))` - User found
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_password_hash(
        &self,
        user_name: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::CampUser::find()
            .filter(entity::camp_user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let hash = entity.password_hash.clone();
            (User::from_entity(entity), hash)
        }))
    }

    /// Checks whether the user holds a claim directly or through one of its roles.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `claim_type` - Claim name, e.g. `SuperUser`
    /// - `claim_value` - Value the claim must carry
    ///
    /// # Returns
    /// - `Ok(true)` - Claim granted
    /// - `Ok(false)` - Claim not held
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_claim(
        &self,
        user_id: i32,
        claim_type: &str,
        claim_value: &str,
    ) -> Result<bool, DbErr> {
        let direct = entity::prelude::UserClaim::find()
            .filter(entity::user_claim::Column::UserId.eq(user_id))
            .filter(entity::user_claim::Column::ClaimType.eq(claim_type))
            .filter(entity::user_claim::Column::ClaimValue.eq(claim_value))
            .count(self.db)
            .await?;

        if direct > 0 {
            return Ok(true);
        }

        let role_ids: Vec<i32> = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|membership| membership.role_id)
            .collect();

        if role_ids.is_empty() {
            return Ok(false);
        }

        let via_role = entity::prelude::RoleClaim::find()
            .filter(entity::role_claim::Column::RoleId.is_in(role_ids))
            .filter(entity::role_claim::Column::ClaimType.eq(claim_type))
            .filter(entity::role_claim::Column::ClaimValue.eq(claim_value))
            .count(self.db)
            .await?;

        Ok(via_role > 0)
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate user name
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::camp_user::ActiveModel {
            user_name: ActiveValue::Set(params.user_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Grants a claim directly to a user unless it is already held directly.
    pub async fn add_claim(
        &self,
        user_id: i32,
        claim_type: &str,
        claim_value: &str,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::UserClaim::find()
            .filter(entity::user_claim::Column::UserId.eq(user_id))
            .filter(entity::user_claim::Column::ClaimType.eq(claim_type))
            .filter(entity::user_claim::Column::ClaimValue.eq(claim_value))
            .count(self.db)
            .await?;

        if existing == 0 {
            entity::user_claim::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                claim_type: ActiveValue::Set(claim_type.to_string()),
                claim_value: ActiveValue::Set(claim_value.to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Returns the ID of the named role, creating the role when missing.
    pub async fn ensure_role(&self, name: &str) -> Result<i32, DbErr> {
        let existing = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        if let Some(role) = existing {
            return Ok(role.id);
        }

        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(role.id)
    }

    /// Attaches a claim to a role unless the role already carries it.
    pub async fn add_role_claim(
        &self,
        role_id: i32,
        claim_type: &str,
        claim_value: &str,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::RoleClaim::find()
            .filter(entity::role_claim::Column::RoleId.eq(role_id))
            .filter(entity::role_claim::Column::ClaimType.eq(claim_type))
            .filter(entity::role_claim::Column::ClaimValue.eq(claim_value))
            .count(self.db)
            .await?;

        if existing == 0 {
            entity::role_claim::ActiveModel {
                role_id: ActiveValue::Set(role_id),
                claim_type: ActiveValue::Set(claim_type.to_string()),
                claim_value: ActiveValue::Set(claim_value.to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Adds a user to a role; adding an existing member is a no-op.
    pub async fn add_to_role(&self, user_id: i32, role_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::UserRole::find_by_id((user_id, role_id))
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role_id: ActiveValue::Set(role_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
