use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Role tags: `admin`, `staff` or `member`.
    pub app_roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateUserDto {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub app_roles: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateUserRolesDto {
    pub app_roles: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TokenDto {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct LogoutTimeDto {
    pub last_logout_at: Option<DateTime<Utc>>,
}
