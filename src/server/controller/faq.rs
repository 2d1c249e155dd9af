use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        faq::{FaqDto, FaqPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{auth::Role, faq::FaqParams},
        service::faq::FaqService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping FAQ endpoints in OpenAPI documentation
pub static FAQ_TAG: &str = "faq";

#[utoipa::path(
    get,
    path = "/api/faq",
    tag = FAQ_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "FAQ entries", body = [FaqDto]),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let entries = FaqService::new(&state.db).get_all().await?;

    let dtos: Vec<FaqDto> = entries.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a FAQ entry.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Created entry
/// - `400 Bad Request` - Blank question or answer
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/faq",
    tag = FAQ_TAG,
    security(("bearer_auth" = [])),
    request_body = FaqPayloadDto,
    responses(
        (status = 201, description = "Created FAQ entry", body = FaqDto),
        (status = 400, description = "Invalid FAQ data", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<FaqPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = FaqParams::from_dto(payload, claims.email)?;
    let faq = FaqService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(faq.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/faq/{id}",
    tag = FAQ_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "FAQ entry ID")),
    request_body = FaqPayloadDto,
    responses(
        (status = 200, description = "Updated FAQ entry", body = FaqDto),
        (status = 400, description = "Invalid FAQ data", body = ValidationErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto)
    ),
)]
pub async fn update_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<FaqPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = FaqParams::from_dto(payload, claims.email)?;

    match FaqService::new(&state.db).update(id, params).await? {
        Some(faq) => Ok((StatusCode::OK, Json(faq.into_dto()))),
        None => Err(AppError::NotFound("FAQ entry not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/faq/{id}",
    tag = FAQ_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "FAQ entry ID")),
    responses(
        (status = 200, description = "FAQ entry deleted", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto)
    ),
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    if !FaqService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("FAQ entry not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("FAQ entry {} deleted", id),
        }),
    ))
}
