use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating or replacing an announcement.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AnnouncementPayloadDto {
    pub title: String,
    pub body: String,
}
