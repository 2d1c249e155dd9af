use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ContactDto {
    pub message: String,
    /// Absent until the message is first set.
    pub modified_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ContactPayloadDto {
    pub message: String,
}
