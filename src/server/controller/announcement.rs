use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        announcement::{AnnouncementDto, AnnouncementPayloadDto},
        api::{ErrorDto, MessageDto, ValidationErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{announcement::AnnouncementParams, auth::Role},
        service::announcement::AnnouncementService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// List announcements, newest first.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Announcements", body = [AnnouncementDto]),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_announcements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let announcements = AnnouncementService::new(&state.db).get_all().await?;

    let dtos: Vec<AnnouncementDto> = announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an announcement.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Title and body
///
/// # Returns
/// - `201 Created` - Created announcement
/// - `400 Bad Request` - Blank title or body
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = AnnouncementPayloadDto,
    responses(
        (status = 201, description = "Created announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<AnnouncementPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = AnnouncementParams::from_dto(payload, claims.email)?;
    let announcement = AnnouncementService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// Replace an announcement's title and body.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Announcement ID")),
    request_body = AnnouncementPayloadDto,
    responses(
        (status = 200, description = "Updated announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<AnnouncementPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = AnnouncementParams::from_dto(payload, claims.email)?;

    match AnnouncementService::new(&state.db).update(id, params).await? {
        Some(announcement) => Ok((StatusCode::OK, Json(announcement.into_dto()))),
        None => Err(AppError::NotFound("Announcement not found".to_string())),
    }
}

/// Delete an announcement.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "Announcement deleted", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    if !AnnouncementService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Announcement not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Announcement {} deleted", id),
        }),
    ))
}
