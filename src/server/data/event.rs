//! Event data repository.
//!
//! Generic over the connection so the series service can use it inside a
//! transaction or savepoint.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    event::{CreateEventParams, Event, EventRange},
    series::EventTemplate,
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one event.
    ///
    /// # Returns
    /// - `Ok(Event)` - Created event
    /// - `Err(DbErr)` - Database error, including foreign-key violation on an unknown
    ///   location, series or user
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let now = Utc::now();
        let entity = entity::event::ActiveModel {
            location_id: ActiveValue::Set(params.location_id),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            summary: ActiveValue::Set(params.summary),
            description: ActiveValue::Set(params.description),
            facilitator: ActiveValue::Set(params.facilitator),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            series_id: ActiveValue::Set(params.series_id),
            created_by: ActiveValue::Set(params.created_by),
            modified_by: ActiveValue::Set(params.modified_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity)
    }

    #[cfg(test)]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .map(Event::from_entity)
            .transpose()
    }

    /// Gets events whose start time falls in `[range.start, range.end)`, ordered by
    /// start time.
    pub async fn get_in_range(&self, range: EventRange) -> Result<Vec<Event>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::StartTime.gte(range.start))
            .filter(entity::event::Column::StartTime.lt(range.end))
            .order_by_asc(entity::event::Column::StartTime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Gets the events linked to a series, ordered by start time.
    pub async fn get_by_series(&self, series_id: i32) -> Result<Vec<Event>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::SeriesId.eq(series_id))
            .order_by_asc(entity::event::Column::StartTime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Links events to a series by setting their `series_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of events linked
    pub async fn connect_to_series(&self, event_ids: &[i32], series_id: i32) -> Result<u64, DbErr> {
        if event_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Event::update_many()
            .col_expr(
                entity::event::Column::SeriesId,
                sea_orm::sea_query::Expr::value(series_id),
            )
            .filter(entity::event::Column::Id.is_in(event_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Overwrites an event's times and descriptive fields from a series template.
    ///
    /// The creator is left untouched.
    ///
    /// # Returns
    /// - `Ok(Event)` - Updated event
    /// - `Err(DbErr::RecordNotFound)` - No event with that id
    pub async fn update_from_template(
        &self,
        id: i32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        template: &EventTemplate,
    ) -> Result<Event, DbErr> {
        let existing = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active: entity::event::ActiveModel = existing.into();
        active.start_time = ActiveValue::Set(start_time);
        active.end_time = ActiveValue::Set(end_time);
        active.summary = ActiveValue::Set(template.summary.clone());
        active.description = ActiveValue::Set(template.description.clone());
        active.facilitator = ActiveValue::Set(template.facilitator.clone());
        active.location_id = ActiveValue::Set(template.location_id);
        active.status = ActiveValue::Set(template.status.as_str().to_string());
        active.modified_by = ActiveValue::Set(template.modified_by.clone());
        active.updated_at = ActiveValue::Set(Utc::now());

        Event::from_entity(active.update(self.db).await?)
    }

    /// Deletes an event, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
