use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single rejected input field.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Body returned for `400 Bad Request` when payload validation fails.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<FieldErrorDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// One failed item of a bulk operation.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BatchFailureDto {
    /// Identifies the item, e.g. an event id or an occurrence start time.
    pub item: String,
    pub error: String,
}

/// Per-item result of a bulk operation over events.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BatchOutcomeDto {
    /// Ids of the events written or removed.
    pub succeeded: Vec<i32>,
    pub failed: Vec<BatchFailureDto>,
}
