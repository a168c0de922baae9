//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It validates documents before they are stored and converts entity models to domain
//! models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::validate::DocumentValidator,
    error::AppError,
    model::user::{InsertUserParam, User, USER_ROLES},
};

/// Repository providing database operations for user management.
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

    /// Validates and inserts a new user.
    ///
    /// # Arguments
    /// - `param` - The generated identifier, requested role and resolved password
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::ValidationErr(_))` - A required field is missing or the role is unknown
    /// - `Err(AppError::DbErr(_))` - Database error during insert, including a duplicate user ID
    pub async fn create(&self, param: InsertUserParam) -> Result<User, AppError> {
        DocumentValidator::new()
            .required("id", Some(param.user_id.as_str()), "User id is required")
            .required("role", param.role.as_deref(), "Role is required")
            .one_of("role", param.role.as_deref(), USER_ROLES)
            .required("password", Some(param.password.as_str()), "Password is required")
            .finish()?;

        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            role: ActiveValue::Set(param.role.unwrap_or_default()),
            password: ActiveValue::Set(param.password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds the identifier of the most recently created user.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - The newest user's identifier
    /// - `Ok(None)` - No users exist yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_last_user_id(&self) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::UserId)
            .one(self.db)
            .await?;

        Ok(entity.map(|user| user.user_id))
    }

    /// Finds a user by their incremental identifier.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that identifier
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
