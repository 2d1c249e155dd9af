use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        event::{CreateEventDto, EventDateQuery, EventDto, EventRangeQuery},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Role,
            event::{CreateEventParams, EventRange},
        },
        service::event::EventService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

async fn events_in(state: &AppState, range: EventRange) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_in_range(range).await?;

    let dtos: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List events starting within `[start, end)`.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Events ordered by start time
/// - `400 Bad Request` - Missing or unparsable timestamps, or `end` not after `start`
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(EventRangeQuery),
    responses(
        (status = 200, description = "Events in range", body = [EventDto]),
        (status = 400, description = "Invalid range", body = ErrorDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    events_in(&state, EventRange::between(query.start, query.end)?).await
}

/// List events on the day of `date`.
#[utoipa::path(
    get,
    path = "/api/events/day",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(EventDateQuery),
    responses(
        (status = 200, description = "Events on that day", body = [EventDto]),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 403, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_events_for_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventDateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    events_in(&state, EventRange::day(query.date)?).await
}

/// List events in the Sunday-to-Saturday week containing `date`.
#[utoipa::path(
    get,
    path = "/api/events/week",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(EventDateQuery),
    responses(
        (status = 200, description = "Events in that week", body = [EventDto]),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 403, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_events_for_week(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventDateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    events_in(&state, EventRange::week(query.date)?).await
}

/// List events in the calendar month containing `date`.
#[utoipa::path(
    get,
    path = "/api/events/month",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(EventDateQuery),
    responses(
        (status = 200, description = "Events in that month", body = [EventDto]),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 403, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_events_for_month(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventDateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    events_in(&state, EventRange::month(query.date)?).await
}

/// Create a standalone event, not linked to any series.
///
/// # Access Control
/// - `Admin`, `Staff`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Location, ISO-8601 start/end times and descriptive fields
///
/// # Returns
/// - `201 Created` - Created event
/// - `400 Bad Request` - Invalid fields or unknown location
/// - `403 Forbidden` - Caller lacks a write role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ValidationErrorDto),
        (status = 403, description = "Not admin or staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin, Role::Staff])
        .await?;

    let params = CreateEventParams::from_dto(payload, claims.email)?;
    let event = EventService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Delete a single event.
///
/// Deleting an event that belongs to a series leaves the series in place.
///
/// # Access Control
/// - `Admin`, `Staff`
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 403, description = "Not admin or staff", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin, Role::Staff])
        .await?;

    if !EventService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Event {} deleted", id),
        }),
    ))
}
