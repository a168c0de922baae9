//! User service for business logic.
//!
//! Provides the `UserService` for registering users. It generates the incremental user
//! identifier, resolves the password and maps identifier collisions to a conflict.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{api::ApiError, internal::InternalError, AppError},
    model::user::{CreateUserParam, InsertUserParam, User},
    util::parse::parse_u32_from_string,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Assigns the next incremental identifier and falls back to `default_password` when
    /// the client did not provide one.
    ///
    /// # Arguments
    /// - `param` - Role and optional password supplied by the client
    /// - `default_password` - Password used when `param.password` is absent
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::ValidationErr(_))` - The role is missing or unknown
    /// - `Err(AppError::ApiErr(_))` - 409 when the generated identifier is already taken
    /// - `Err(AppError::DbErr(_))` - Database error during query or insert
    pub async fn create(
        &self,
        param: CreateUserParam,
        default_password: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user_id = self.generate_user_id().await?;
        let password = param
            .password
            .filter(|password| !password.is_empty())
            .unwrap_or_else(|| default_password.to_string());

        let result = user_repo
            .create(InsertUserParam {
                user_id,
                role: param.role,
                password,
            })
            .await;

        match result {
            Err(err) if err.is_unique_violation() => {
                Err(ApiError::conflict("user already exists").into())
            }
            other => other,
        }
    }

    /// Generates the identifier the next registered user will receive.
    ///
    /// # Returns
    /// - `Ok(String)` - Five digit, zero padded identifier
    /// - `Err(AppError::InternalErr(_))` - The last stored identifier is not numeric
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn generate_user_id(&self) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);
        let last_user_id = user_repo.find_last_user_id().await?;

        next_user_id(last_user_id.as_deref())
    }
}

/// Increments the last issued user identifier, starting from `"00001"`.
pub fn next_user_id(last_user_id: Option<&str>) -> Result<String, AppError> {
    let last = match last_user_id {
        Some(user_id) => parse_u32_from_string(user_id)?,
        None => 0,
    };
    let next = last
        .checked_add(1)
        .ok_or_else(|| InternalError::UserIdOverflow(last.to_string()))?;

    Ok(format!("{next:05}"))
}
