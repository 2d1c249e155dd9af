use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections render as `AppError`.
///
/// Axum's own `Json` answers type mismatches with 422. Here they are a 400 listing
/// the offending field, and unparseable bodies a 400 with the usual `{"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
