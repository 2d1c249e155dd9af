use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactDto, ContactPayloadDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::auth::Role,
        service::contact::ContactService, state::AppState, util::extract::ApiJson,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Get the lab's contact message. Empty until an admin sets one.
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = CONTACT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Contact message", body = ContactDto),
        (status = 403, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let contact = ContactService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}

/// Replace the lab's contact message.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/contact",
    tag = CONTACT_TAG,
    security(("bearer_auth" = [])),
    request_body = ContactPayloadDto,
    responses(
        (status = 200, description = "Stored contact message", body = ContactDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn set_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<ContactPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let contact = ContactService::new(&state.db)
        .set(payload.message, claims.email)
        .await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}
