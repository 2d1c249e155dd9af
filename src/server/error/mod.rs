//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, validation::FieldError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400 Bad Request, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations (unique, foreign key) result in 400 Bad Request; anything
    /// else results in 500 Internal Server Error carrying the database message.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Unexpected internal failure.
    ///
    /// Results in 500 Internal Server Error with a generic message.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Filesystem error while reading or writing uploads.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more payload fields failed validation.
    ///
    /// Results in 400 Bad Request with every rejected field listed.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with the current state of stored records.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a single-field validation failure.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }
}

/// Malformed or mistyped JSON bodies are client errors.
///
/// Bodies that parse but do not fit the payload type are reported against the
/// offending field; everything else stays a plain bad request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Validation(vec![validation::field_error_from_json(&err.body_text())])
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `Validation` and database constraint violations
/// - 404 Not Found - For `NotFound` and `DbErr::RecordNotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    errors: errors.into_iter().map(FieldError::into_dto).collect(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) => db_error_response(err),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Maps a database error onto a response.
///
/// Unique and foreign-key violations are the caller's fault and become 400. Missing
/// records become 404. Everything else is logged and returned as 500 with the raw
/// database message.
fn db_error_response(err: DbErr) -> Response {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "unique constraint violation");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Record already exists: {}", detail),
                }),
            )
                .into_response();
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!(%detail, "foreign key constraint violation");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Foreign key constraint violated: {}", detail),
                }),
            )
                .into_response();
        }
        _ => {}
    }

    if let DbErr::RecordNotFound(msg) = err {
        return (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response();
    }

    tracing::error!(error = %err, "database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
