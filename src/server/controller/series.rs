use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        series::{SeriesCreatedDto, SeriesDeletedDto, SeriesDto, SeriesPayloadDto, SeriesUpdatedDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{auth::Role, series::SeriesParams},
        service::series::SeriesService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping series endpoints in OpenAPI documentation
pub static SERIES_TAG: &str = "series";

/// Get a series together with the events it generated.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Series with events ordered by start time
/// - `400 Bad Request` - Invalid ID
/// - `404 Not Found` - No such series
#[utoipa::path(
    get,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Series ID")),
    responses(
        (status = 200, description = "Series with its events", body = SeriesDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto)
    ),
)]
pub async fn get_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let series = SeriesService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(series.into_dto())))
}

/// Create a recurring series and generate its events.
///
/// One event is generated for every selected weekday of every
/// `recurrence_frequency_weeks`-th week between `start_date` and `end_date`,
/// both inclusive. Occurrences that fail to persist are reported in
/// `generation.failed` rather than failing the request.
///
/// # Access Control
/// - `Admin`, `Staff`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Series fields and recurrence schedule
///
/// # Returns
/// - `201 Created` - Series, its events and the generation outcome
/// - `400 Bad Request` - Invalid schedule or unknown location
/// - `403 Forbidden` - Caller lacks a write role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/series",
    tag = SERIES_TAG,
    security(("bearer_auth" = [])),
    request_body = SeriesPayloadDto,
    responses(
        (status = 201, description = "Created series", body = SeriesCreatedDto),
        (status = 400, description = "Invalid series data", body = ValidationErrorDto),
        (status = 403, description = "Not admin or staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<SeriesPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin, Role::Staff])
        .await?;

    let params = SeriesParams::from_dto(payload, claims.email);
    let created = SeriesService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Update a series and reconcile its events.
///
/// If the dates, cadence and weekdays are unchanged the existing events are
/// patched in place and keep their ids. Otherwise every event is deleted and
/// the schedule is regenerated.
///
/// # Access Control
/// - `Admin`, `Staff`
///
/// # Returns
/// - `200 OK` - Updated series and what happened to its events
/// - `400 Bad Request` - Invalid schedule or unknown location
/// - `404 Not Found` - No such series
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Series ID")),
    request_body = SeriesPayloadDto,
    responses(
        (status = 200, description = "Updated series", body = SeriesUpdatedDto),
        (status = 400, description = "Invalid series data", body = ValidationErrorDto),
        (status = 403, description = "Not admin or staff", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<SeriesPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin, Role::Staff])
        .await?;

    let params = SeriesParams::from_dto(payload, claims.email);
    let updated = SeriesService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete a series and every event it generated.
///
/// # Access Control
/// - `Admin`, `Staff`
#[utoipa::path(
    delete,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Series ID")),
    responses(
        (status = 200, description = "Series deleted", body = SeriesDeletedDto),
        (status = 403, description = "Not admin or staff", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 409, description = "Events could not be removed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin, Role::Staff])
        .await?;

    let deleted = SeriesService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(deleted.into_dto())))
}
