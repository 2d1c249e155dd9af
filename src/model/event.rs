use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Lifecycle status shared by events and series.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusDto {
    #[default]
    Tentative,
    Confirmed,
    Cancelled,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct EventDto {
    pub id: i32,
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub summary: String,
    pub description: Option<String>,
    pub facilitator: Option<String>,
    pub status: StatusDto,
    /// Owning series, absent for standalone events.
    pub series_id: Option<i32>,
    pub created_by: String,
    pub modified_by: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateEventDto {
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub facilitator: Option<String>,
    #[serde(default)]
    pub status: StatusDto,
}

/// Half-open `[start, end)` range query.
#[derive(Deserialize, IntoParams, Debug)]
pub struct EventRangeQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Query for the day, week or month containing `date`.
#[derive(Deserialize, IntoParams, Debug)]
pub struct EventDateQuery {
    pub date: NaiveDate,
}
