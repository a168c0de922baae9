//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::user::{UserDto, UserInputDto};

pub const USER_ROLES: &[&str] = &["student", "faculty", "admin"];

/// A registered user. The stored password never leaves the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Incremental, zero padded identifier ("00001").
    pub user_id: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user_id,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for registering a user, as received from the client.
#[derive(Debug, Clone, Default)]
pub struct CreateUserParam {
    pub role: Option<String>,
    pub password: Option<String>,
}

impl From<UserInputDto> for CreateUserParam {
    fn from(dto: UserInputDto) -> Self {
        Self {
            role: dto.role,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user once its identifier and password are settled.
#[derive(Debug, Clone)]
pub struct InsertUserParam {
    pub user_id: String,
    pub role: Option<String>,
    pub password: String,
}
