//! Series data repository.
//!
//! Stores only the series row; events are handled by `EventRepository` and linked
//! through `event.series_id`.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::{
    model::series::{Series, SeriesParams},
    util::parse::to_json_array,
};

pub struct SeriesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeriesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a series row; the actor is recorded as creator and modifier.
    ///
    /// # Returns
    /// - `Ok(Series)` - Created series
    /// - `Err(DbErr)` - Database error, including foreign-key violation on an unknown
    ///   location or user
    pub async fn create(&self, params: &SeriesParams) -> Result<Series, DbErr> {
        let now = Utc::now();
        let schedule = &params.schedule;
        let entity = entity::series::ActiveModel {
            title: ActiveValue::Set(params.title.clone()),
            summary: ActiveValue::Set(params.summary.clone()),
            description: ActiveValue::Set(params.description.clone()),
            facilitator: ActiveValue::Set(params.facilitator.clone()),
            location_id: ActiveValue::Set(params.location_id),
            start_time: ActiveValue::Set(schedule.start_time),
            end_time: ActiveValue::Set(schedule.end_time),
            start_date: ActiveValue::Set(schedule.start_date),
            end_date: ActiveValue::Set(schedule.end_date),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            recurrence_frequency_weeks: ActiveValue::Set(schedule.recurrence_frequency_weeks),
            recurrence_frequency_days: ActiveValue::Set(to_json_array(
                "recurrence_frequency_days",
                &schedule.recurrence_frequency_days,
            )?),
            created_by: ActiveValue::Set(params.actor.clone()),
            modified_by: ActiveValue::Set(params.actor.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Series::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Series>, DbErr> {
        entity::prelude::Series::find_by_id(id)
            .one(self.db)
            .await?
            .map(Series::from_entity)
            .transpose()
    }

    /// Replaces every editable field of a series row.
    ///
    /// # Returns
    /// - `Ok(Series)` - Updated series
    /// - `Err(DbErr::RecordNotFound)` - No series with that id
    pub async fn update(&self, id: i32, params: &SeriesParams) -> Result<Series, DbErr> {
        let existing = entity::prelude::Series::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Series {} not found", id)))?;

        let schedule = &params.schedule;
        let mut active: entity::series::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title.clone());
        active.summary = ActiveValue::Set(params.summary.clone());
        active.description = ActiveValue::Set(params.description.clone());
        active.facilitator = ActiveValue::Set(params.facilitator.clone());
        active.location_id = ActiveValue::Set(params.location_id);
        active.start_time = ActiveValue::Set(schedule.start_time);
        active.end_time = ActiveValue::Set(schedule.end_time);
        active.start_date = ActiveValue::Set(schedule.start_date);
        active.end_date = ActiveValue::Set(schedule.end_date);
        active.status = ActiveValue::Set(params.status.as_str().to_string());
        active.recurrence_frequency_weeks = ActiveValue::Set(schedule.recurrence_frequency_weeks);
        active.recurrence_frequency_days = ActiveValue::Set(to_json_array(
            "recurrence_frequency_days",
            &schedule.recurrence_frequency_days,
        )?);
        active.modified_by = ActiveValue::Set(params.actor.clone());
        active.updated_at = ActiveValue::Set(Utc::now());

        Series::from_entity(active.update(self.db).await?)
    }

    /// Deletes a series row, returning whether a row was removed.
    ///
    /// Fails with a foreign-key violation while events still reference it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Series::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
