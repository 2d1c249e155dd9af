//! Event factory for creating standalone or series-linked events.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test events.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    start_time: DateTime<Utc>,
    duration: Duration,
    summary: String,
    series_id: Option<i32>,
    created_by: String,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults: starts 2024-06-03 09:00 UTC, lasts one hour, no series.
    pub fn new(db: &'a DatabaseConnection, location_id: i32, created_by: &str) -> Self {
        let id = next_id();
        Self {
            db,
            location_id,
            start_time: Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap(),
            duration: Duration::hours(1),
            summary: format!("Event {}", id),
            series_id: None,
            created_by: created_by.to_string(),
        }
    }

    /// Sets the start timestamp.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Shifts the start timestamp by whole days.
    pub fn day_offset(mut self, days: i64) -> Self {
        self.start_time += Duration::days(days);
        self
    }

    /// Links the event to a series.
    pub fn series_id(mut self, series_id: i32) -> Self {
        self.series_id = Some(series_id);
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            location_id: ActiveValue::Set(self.location_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + self.duration),
            summary: ActiveValue::Set(self.summary),
            description: ActiveValue::Set(None),
            facilitator: ActiveValue::Set(None),
            status: ActiveValue::Set("tentative".to_string()),
            series_id: ActiveValue::Set(self.series_id),
            created_by: ActiveValue::Set(self.created_by.clone()),
            modified_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a standalone event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    location_id: i32,
    created_by: &str,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, location_id, created_by).build().await
}
