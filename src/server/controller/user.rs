use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{CreateUserDto, UpdateUserRolesDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Role,
            user::{parse_roles, CreateUserParams},
        },
        service::user::UserService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all user accounts.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Users ordered by email
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Users", body = [UserDto]),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a user account.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Email, name, initial password and role tags
///
/// # Returns
/// - `201 Created` - Created user
/// - `400 Bad Request` - Invalid fields, unknown role or duplicate email
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = CreateUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Replace a user's roles.
///
/// Existing tokens keep the roles they were issued with until they expire or the
/// user logs out.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/user/{user_id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRolesDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Unknown role", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateUserRolesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let roles = parse_roles(&payload.app_roles).map_err(|e| AppError::Validation(vec![e]))?;

    match UserService::new(&state.db)
        .update_roles(user_id, roles)
        .await?
    {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
