//! Event domain models, parameters and date ranges.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::event::{CreateEventDto, EventDto, StatusDto},
    server::error::{
        validation::{require_text, FieldError},
        AppError,
    },
};

/// Lifecycle status of an event or series, stored lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventStatus {
    #[default]
    Tentative,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tentative => "tentative",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a stored status column.
    ///
    /// # Returns
    /// - `Ok(EventStatus)` - Recognized value
    /// - `Err(DbErr::Custom)` - Unknown value in the database
    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "tentative" => Ok(Self::Tentative),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DbErr::Custom(format!("Unknown status '{}'", other))),
        }
    }

    pub fn from_dto(dto: StatusDto) -> Self {
        match dto {
            StatusDto::Tentative => Self::Tentative,
            StatusDto::Confirmed => Self::Confirmed,
            StatusDto::Cancelled => Self::Cancelled,
        }
    }

    pub fn into_dto(self) -> StatusDto {
        match self {
            Self::Tentative => StatusDto::Tentative,
            Self::Confirmed => StatusDto::Confirmed,
            Self::Cancelled => StatusDto::Cancelled,
        }
    }
}

/// A concrete calendar event, standalone or generated by a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub summary: String,
    pub description: Option<String>,
    pub facilitator: Option<String>,
    pub status: EventStatus,
    pub series_id: Option<i32>,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - Converted event
    /// - `Err(DbErr::Custom)` - Stored status is not recognized
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            location_id: entity.location_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            summary: entity.summary,
            description: entity.description,
            facilitator: entity.facilitator,
            status: EventStatus::parse(&entity.status)?,
            series_id: entity.series_id,
            created_by: entity.created_by,
            modified_by: entity.modified_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            location_id: self.location_id,
            start_time: self.start_time,
            end_time: self.end_time,
            summary: self.summary,
            description: self.description,
            facilitator: self.facilitator,
            status: self.status.into_dto(),
            series_id: self.series_id,
            created_by: self.created_by,
            modified_by: self.modified_by,
        }
    }
}

/// Parameters for inserting one event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub summary: String,
    pub description: Option<String>,
    pub facilitator: Option<String>,
    pub status: EventStatus,
    pub series_id: Option<i32>,
    pub created_by: String,
    pub modified_by: String,
}

impl CreateEventParams {
    /// Converts a standalone event payload, rejecting a blank summary or an end time
    /// not after the start time.
    pub fn from_dto(dto: CreateEventDto, actor: String) -> Result<Self, AppError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "summary", &dto.summary);
        if dto.end_time <= dto.start_time {
            errors.push(FieldError::new("end_time", "must be after start_time"));
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            location_id: dto.location_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
            summary: dto.summary,
            description: dto.description,
            facilitator: dto.facilitator,
            status: EventStatus::from_dto(dto.status),
            series_id: None,
            created_by: actor.clone(),
            modified_by: actor,
        })
    }
}

/// Half-open `[start, end)` interval over event start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EventRange {
    /// Arbitrary range; `end` must be after `start`.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AppError> {
        if end <= start {
            return Err(AppError::invalid("end", "must be after start"));
        }

        Ok(Self { start, end })
    }

    /// The calendar day of `date`.
    pub fn day(date: NaiveDate) -> Result<Self, AppError> {
        Self::spanning(date, date.checked_add_signed(Duration::days(1)))
    }

    /// The Sunday-anchored week containing `date`.
    pub fn week(date: NaiveDate) -> Result<Self, AppError> {
        let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
        Self::spanning(sunday, sunday.checked_add_signed(Duration::days(7)))
    }

    /// The calendar month containing `date`.
    pub fn month(date: NaiveDate) -> Result<Self, AppError> {
        let first = date.with_day(1).unwrap_or(date);
        Self::spanning(first, first.checked_add_months(Months::new(1)))
    }

    fn spanning(first: NaiveDate, next: Option<NaiveDate>) -> Result<Self, AppError> {
        let next = next.ok_or_else(|| AppError::invalid("date", "is out of range"))?;

        Ok(Self {
            start: first.and_time(NaiveTime::MIN).and_utc(),
            end: next.and_time(NaiveTime::MIN).and_utc(),
        })
    }
}
