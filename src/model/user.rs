//! User domain models and parameters.
//!
//! Provides the domain model for registered accounts along with the parameter
//! type used at registration. The password hash stays inside the domain model
//! and is stripped when converting to the API DTO.

use chrono::{DateTime, Utc};

use crate::dto::auth::UserDto;

/// Registered account with credentials and the admin flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    /// Login email, unique across users.
    pub email: String,
    /// Argon2 hash in PHC string form. Never serialized to the API.
    pub password_hash: String,
    pub phone: Option<String>,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone: entity.phone,
            admin: entity.admin,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here; no endpoint returns it.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            admin: self.admin,
        }
    }
}

/// Parameters for creating a user during registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    /// Already hashed; the service hashes before calling the repository.
    pub password_hash: String,
    pub phone: Option<String>,
    pub admin: bool,
}
