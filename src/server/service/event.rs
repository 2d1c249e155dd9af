use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParams, Event, EventRange},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets events starting within the range, ordered by start time.
    pub async fn get_in_range(&self, range: EventRange) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_in_range(range).await?)
    }

    /// Creates a standalone event.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db).create(params).await?;

        tracing::info!(event_id = event.id, "created event");

        Ok(event)
    }

    /// Deletes an event, series-linked or not.
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(EventRepository::new(self.db).delete(id).await?)
    }
}
