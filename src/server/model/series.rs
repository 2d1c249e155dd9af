//! Series domain models and parameters.
//!
//! A series is a recurring schedule (date range, daily time window, weekly cadence and
//! weekday set) plus the descriptive fields copied onto every event it generates.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::series::{
        SeriesCreatedDto, SeriesDeletedDto, SeriesDto, SeriesPayloadDto, SeriesUpdatedDto,
    },
    server::{
        error::validation::{require_text, FieldError},
        model::{
            batch::BatchOutcome,
            event::{Event, EventStatus},
        },
        util::parse::parse_int_array,
    },
};

/// The recurrence part of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// First eligible date, inclusive.
    pub start_date: NaiveDate,
    /// Last eligible date, inclusive.
    pub end_date: NaiveDate,
    /// Daily start, applied to every occurrence.
    pub start_time: NaiveTime,
    /// Daily end, applied to every occurrence.
    pub end_time: NaiveTime,
    /// Repeat every N weeks.
    pub recurrence_frequency_weeks: i32,
    /// Weekday offsets, Sunday = 0.
    pub recurrence_frequency_days: Vec<i32>,
}

/// One planned event slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Descriptive fields copied verbatim onto each generated event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTemplate {
    /// Series title; becomes the event summary.
    pub summary: String,
    pub description: Option<String>,
    pub facilitator: Option<String>,
    pub location_id: i32,
    pub status: EventStatus,
    pub created_by: String,
    pub modified_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub facilitator: Option<String>,
    pub location_id: i32,
    pub status: EventStatus,
    pub schedule: Schedule,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Series {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Series)` - Converted series
    /// - `Err(DbErr)` - Stored weekday list or status could not be parsed
    pub fn from_entity(entity: entity::series::Model) -> Result<Self, DbErr> {
        let days = parse_int_array(
            "recurrence_frequency_days",
            &entity.recurrence_frequency_days,
        )?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            summary: entity.summary,
            description: entity.description,
            facilitator: entity.facilitator,
            location_id: entity.location_id,
            status: EventStatus::parse(&entity.status)?,
            schedule: Schedule {
                start_date: entity.start_date,
                end_date: entity.end_date,
                start_time: entity.start_time,
                end_time: entity.end_time,
                recurrence_frequency_weeks: entity.recurrence_frequency_weeks,
                recurrence_frequency_days: days,
            },
            created_by: entity.created_by,
            modified_by: entity.modified_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self, events: Vec<Event>) -> SeriesDto {
        SeriesDto {
            id: self.id,
            title: self.title,
            summary: self.summary,
            description: self.description,
            facilitator: self.facilitator,
            location_id: self.location_id,
            start_time: self.schedule.start_time,
            end_time: self.schedule.end_time,
            start_date: self.schedule.start_date,
            end_date: self.schedule.end_date,
            status: self.status.into_dto(),
            recurrence_frequency_weeks: self.schedule.recurrence_frequency_weeks,
            recurrence_frequency_days: self.schedule.recurrence_frequency_days,
            created_by: self.created_by,
            modified_by: self.modified_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
            events: events.into_iter().map(Event::into_dto).collect(),
        }
    }
}

/// A series together with its linked events, ordered by start time.
#[derive(Debug, Clone)]
pub struct SeriesWithEvents {
    pub series: Series,
    pub events: Vec<Event>,
}

impl SeriesWithEvents {
    pub fn into_dto(self) -> SeriesDto {
        self.series.into_dto(self.events)
    }
}

/// Parameters for creating or replacing a series.
#[derive(Debug, Clone)]
pub struct SeriesParams {
    pub title: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub facilitator: Option<String>,
    pub location_id: i32,
    pub status: EventStatus,
    pub schedule: Schedule,
    /// Email of the acting user.
    pub actor: String,
}

impl SeriesParams {
    pub fn from_dto(dto: SeriesPayloadDto, actor: String) -> Self {
        Self {
            title: dto.title,
            summary: dto.summary,
            description: dto.description,
            facilitator: dto.facilitator,
            location_id: dto.location_id,
            status: EventStatus::from_dto(dto.status),
            schedule: Schedule {
                start_date: dto.start_date,
                end_date: dto.end_date,
                start_time: dto.start_time,
                end_time: dto.end_time,
                recurrence_frequency_weeks: dto.recurrence_frequency_weeks,
                recurrence_frequency_days: dto.recurrence_frequency_days,
            },
            actor,
        }
    }

    /// Checks the non-schedule fields.
    pub fn validate_fields(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "title", &self.title);
        errors
    }

    /// Event template for events generated from these parameters.
    ///
    /// # Arguments
    /// - `created_by` - Creator recorded on the generated events
    pub fn template(&self, created_by: &str) -> EventTemplate {
        EventTemplate {
            summary: self.title.clone(),
            description: self.description.clone(),
            facilitator: self.facilitator.clone(),
            location_id: self.location_id,
            status: self.status,
            created_by: created_by.to_string(),
            modified_by: self.actor.clone(),
        }
    }
}

/// Result of creating a series.
#[derive(Debug)]
pub struct SeriesCreated {
    pub series: SeriesWithEvents,
    pub generation: BatchOutcome<i32>,
}

impl SeriesCreated {
    pub fn into_dto(self) -> SeriesCreatedDto {
        SeriesCreatedDto {
            series: self.series.into_dto(),
            generation: self.generation.into_dto(),
        }
    }
}

/// How an update brought the linked events in line with the series.
#[derive(Debug)]
pub enum Reconciliation {
    /// Schedule unchanged; existing events were patched.
    InPlace { events_updated: u64 },
    /// Schedule changed; events were removed and generated again.
    Regenerated {
        removal: BatchOutcome<i32>,
        generation: BatchOutcome<i32>,
    },
}

/// Result of updating a series.
#[derive(Debug)]
pub struct SeriesUpdated {
    pub series: SeriesWithEvents,
    pub reconciliation: Reconciliation,
}

impl SeriesUpdated {
    pub fn into_dto(self) -> SeriesUpdatedDto {
        let series = self.series.into_dto();
        match self.reconciliation {
            Reconciliation::InPlace { events_updated } => SeriesUpdatedDto {
                series,
                regenerated: false,
                events_updated,
                removal: None,
                generation: None,
            },
            Reconciliation::Regenerated {
                removal,
                generation,
            } => SeriesUpdatedDto {
                series,
                regenerated: true,
                events_updated: 0,
                removal: Some(removal.into_dto()),
                generation: Some(generation.into_dto()),
            },
        }
    }
}

/// Result of deleting a series.
#[derive(Debug)]
pub struct SeriesDeleted {
    pub id: i32,
    pub removal: BatchOutcome<i32>,
}

impl SeriesDeleted {
    pub fn into_dto(self) -> SeriesDeletedDto {
        SeriesDeletedDto {
            id: self.id,
            removal: self.removal.into_dto(),
        }
    }
}
