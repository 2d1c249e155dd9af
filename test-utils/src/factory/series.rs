//! Series factory for creating series rows without generating events.

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test series.
///
/// Only the series row is inserted; use the application's series service to exercise
/// event generation.
pub struct SeriesFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    location_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    weeks: i32,
    days: Vec<u8>,
    created_by: String,
}

impl<'a> SeriesFactory<'a> {
    /// Creates a new SeriesFactory with default values.
    ///
    /// Defaults: June 2024, Mondays, weekly, 09:00-10:00.
    pub fn new(db: &'a DatabaseConnection, location_id: i32, created_by: &str) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Series {}", id),
            location_id,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            weeks: 1,
            days: vec![1],
            created_by: created_by.to_string(),
        }
    }

    /// Sets the inclusive date range.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Sets the recurrence cadence and weekday offsets.
    pub fn recurrence(mut self, weeks: i32, days: &[u8]) -> Self {
        self.weeks = weeks;
        self.days = days.to_vec();
        self
    }

    /// Builds and inserts the series entity into the database.
    pub async fn build(self) -> Result<entity::series::Model, DbErr> {
        let now = Utc::now();
        let days = serde_json::to_string(&self.days).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::series::ActiveModel {
            title: ActiveValue::Set(self.title),
            summary: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            facilitator: ActiveValue::Set(None),
            location_id: ActiveValue::Set(self.location_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set("tentative".to_string()),
            recurrence_frequency_weeks: ActiveValue::Set(self.weeks),
            recurrence_frequency_days: ActiveValue::Set(days),
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

/// Creates a series with default values.
pub async fn create_series(
    db: &DatabaseConnection,
    location_id: i32,
    created_by: &str,
) -> Result<entity::series::Model, DbErr> {
    SeriesFactory::new(db, location_id, created_by).build().await
}
