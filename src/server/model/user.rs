//! User domain models and parameters.
//!
//! Provides the application user with credential and role data, and parameter types
//! for account creation and role updates.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        error::{
            validation::{require_text, FieldError},
            AppError,
        },
        model::auth::RoleSet,
        util::parse::parse_string_array,
    },
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// User with credentials, roles and logout bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Argon2 PHC string; empty when the account has no password.
    pub password_hash: String,
    pub roles: RoleSet,
    pub last_logout_at: Option<DateTime<Utc>>,
    /// Only tokens carrying this version are accepted; logout increments it.
    pub token_version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            app_roles: self.roles.to_tags(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Unknown role tags in the stored array are dropped.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Json)` - `app_roles` is not a JSON string array
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let tags = parse_string_array("app_roles", &entity.app_roles)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            roles: RoleSet::from_tags_lossy(&tags),
            last_logout_at: entity.last_logout_at,
            token_version: entity.token_version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password: String,
    pub roles: RoleSet,
}

impl CreateUserParams {
    /// Converts and validates the payload.
    ///
    /// Emails are trimmed and lowercased. Passwords need at least eight characters.
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let email = dto.email.trim().to_lowercase();
        if !email.contains('@') {
            errors.push(FieldError::new("email", "must be an email address"));
        }
        require_text(&mut errors, "name", &dto.name);
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(FieldError::new(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }
        let roles = match parse_roles(&dto.app_roles) {
            Ok(roles) => Some(roles),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        match roles {
            Some(roles) if errors.is_empty() => Ok(Self {
                email,
                name: dto.name.trim().to_string(),
                password: dto.password,
                roles,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// Parses role tags from a request, rejecting unknown ones.
pub fn parse_roles(tags: &[String]) -> Result<RoleSet, FieldError> {
    RoleSet::from_tags(tags)
        .map_err(|tag| FieldError::new("app_roles", format!("unknown role '{}'", tag)))
}
