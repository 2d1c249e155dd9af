use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::BatchOutcomeDto,
    event::{EventDto, StatusDto},
};

/// Body for creating or replacing a series.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SeriesPayloadDto {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub facilitator: Option<String>,
    pub location_id: i32,
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "10:00:00")]
    pub end_time: NaiveTime,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: StatusDto,
    pub recurrence_frequency_weeks: i32,
    /// Weekday offsets, Sunday = 0.
    pub recurrence_frequency_days: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SeriesDto {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub facilitator: Option<String>,
    pub location_id: i32,
    #[schema(value_type = String)]
    pub start_time: NaiveTime,
    #[schema(value_type = String)]
    pub end_time: NaiveTime,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: StatusDto,
    pub recurrence_frequency_weeks: i32,
    pub recurrence_frequency_days: Vec<i32>,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Linked events ordered by start time.
    pub events: Vec<EventDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SeriesCreatedDto {
    pub series: SeriesDto,
    /// Result of generating the series events.
    pub generation: BatchOutcomeDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SeriesUpdatedDto {
    pub series: SeriesDto,
    /// `true` when the schedule changed and the events were replaced.
    pub regenerated: bool,
    /// Number of events patched in place; zero when regenerated.
    pub events_updated: u64,
    /// Removal of the superseded events, present when regenerated.
    pub removal: Option<BatchOutcomeDto>,
    /// Generation of the replacement events, present when regenerated.
    pub generation: Option<BatchOutcomeDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SeriesDeletedDto {
    pub id: i32,
    pub removal: BatchOutcomeDto,
}
