use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::auth::Role,
        service::document::DocumentService, state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Download the schedule PDF.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - PDF bytes
/// - `404 Not Found` - Nothing has been uploaded yet
#[utoipa::path(
    get,
    path = "/api/schedule-pdf",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Schedule PDF", content_type = "application/pdf", body = Vec<u8>),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No schedule uploaded", body = ErrorDto)
    ),
)]
pub async fn download_schedule_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let bytes = DocumentService::new(&state.upload_dir)
        .read_schedule_pdf()
        .await?
        .ok_or_else(|| AppError::NotFound("No schedule has been uploaded".to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, PDF_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, "inline; filename=\"schedule.pdf\""),
        ],
        bytes,
    ))
}

/// Upload a new schedule PDF, replacing the previous one.
///
/// The first multipart field is used and must be declared `application/pdf`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - File stored
/// - `400 Bad Request` - No file, wrong content type or not a PDF
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/schedule-pdf",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Form with a single PDF file field"),
    responses(
        (status = 200, description = "Schedule stored", body = MessageDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn upload_schedule_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Role::Admin])
        .await?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
        .ok_or_else(|| AppError::BadRequest("Upload contains no file".to_string()))?;

    if field.content_type() != Some(PDF_CONTENT_TYPE) {
        return Err(AppError::BadRequest(format!(
            "Only {} uploads are accepted",
            PDF_CONTENT_TYPE
        )));
    }

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;

    DocumentService::new(&state.upload_dir)
        .save_schedule_pdf(&bytes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Schedule uploaded".to_string(),
        }),
    ))
}
