use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        location::{LocationDto, LocationPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{auth::Role, location::LocationParams},
        service::location::LocationService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "location";

/// List all locations ordered by name.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Locations", body = [LocationDto]),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_locations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let locations = LocationService::new(&state.db).get_all().await?;

    let dtos: Vec<LocationDto> = locations.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single location.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Location
/// - `400 Bad Request` - Invalid ID
/// - `404 Not Found` - No such location
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location", body = LocationDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let location = LocationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Create a location.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    security(("bearer_auth" = [])),
    request_body = LocationPayloadDto,
    responses(
        (status = 201, description = "Created location", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<LocationPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = LocationParams::from_dto(payload, claims.email)?;
    let location = LocationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// Update a location.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Location ID")),
    request_body = LocationPayloadDto,
    responses(
        (status = 200, description = "Updated location", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<LocationPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = LocationParams::from_dto(payload, claims.email)?;

    match LocationService::new(&state.db).update(id, params).await? {
        Some(location) => Ok((StatusCode::OK, Json(location.into_dto()))),
        None => Err(AppError::NotFound("Location not found".to_string())),
    }
}

/// Delete a location.
///
/// Locations still referenced by events or series cannot be deleted.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Location deleted
/// - `400 Bad Request` - Location is still in use
/// - `404 Not Found` - No such location
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location deleted", body = MessageDto),
        (status = 400, description = "Location is still referenced", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    if !LocationService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Location not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Location {} deleted", id),
        }),
    ))
}
