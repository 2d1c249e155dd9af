use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LogoutTimeDto, TokenDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::Claims,
        service::auth::AuthService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn caller_id(claims: &Claims) -> Result<i32, AppError> {
    claims
        .user_id()
        .ok_or_else(|| AppError::InternalError(format!("Invalid token subject '{}'", claims.sub)))
}

/// Exchange email and password for a bearer token.
///
/// # Arguments
/// - `state` - Application state containing the database connection and JWT settings
/// - `payload` - Email and plaintext password
///
/// # Returns
/// - `200 OK` - Token and user profile
/// - `400 Bad Request` - Malformed body
/// - `403 Forbidden` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 403, description = "Invalid credentials", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db)
        .login(&payload.email, &payload.password, &state.jwt)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Revoke every token issued to the caller so far.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Logout time recorded
/// - `400 Bad Request` - Malformed or invalid token
/// - `403 Forbidden` - Missing or already revoked token
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = LogoutTimeDto),
        (status = 400, description = "Malformed or invalid token", body = ErrorDto),
        (status = 403, description = "Missing or revoked token", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let at = AuthService::new(&state.db)
        .logout(caller_id(&claims)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LogoutTimeDto {
            last_logout_at: Some(at),
        }),
    ))
}

/// Get the caller's last logout time, `null` if they never logged out.
#[utoipa::path(
    get,
    path = "/api/logouttime",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Last logout time", body = LogoutTimeDto),
        (status = 400, description = "Malformed or invalid token", body = ErrorDto),
        (status = 403, description = "Missing or revoked token", body = ErrorDto)
    ),
)]
pub async fn logout_time(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let last_logout_at = AuthService::new(&state.db)
        .logout_time(caller_id(&claims)?)
        .await?;

    Ok((StatusCode::OK, Json(LogoutTimeDto { last_logout_at })))
}
