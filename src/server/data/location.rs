//! Location data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryOrder,
};

use crate::server::model::location::{Location, LocationParams};

pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all locations ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::Location::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Location::from_entity))
    }

    /// Creates a location; the actor is recorded as creator and modifier.
    ///
    /// # Returns
    /// - `Ok(Location)` - Created location
    /// - `Err(DbErr)` - Database error, including unique violation on `name`
    pub async fn create(&self, params: LocationParams) -> Result<Location, DbErr> {
        let now = Utc::now();
        let entity = entity::location::ActiveModel {
            name: ActiveValue::Set(params.name),
            building: ActiveValue::Set(params.building),
            room: ActiveValue::Set(params.room),
            description: ActiveValue::Set(params.description),
            created_by: ActiveValue::Set(params.actor.clone()),
            modified_by: ActiveValue::Set(params.actor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Location::from_entity(entity))
    }

    /// Replaces a location's fields.
    ///
    /// # Returns
    /// - `Ok(Some(Location))` - Updated location
    /// - `Ok(None)` - No location with that id
    pub async fn update(&self, id: i32, params: LocationParams) -> Result<Option<Location>, DbErr> {
        let Some(existing) = entity::prelude::Location::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::location::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.building = ActiveValue::Set(params.building);
        active.room = ActiveValue::Set(params.room);
        active.description = ActiveValue::Set(params.description);
        active.modified_by = ActiveValue::Set(params.actor);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Location::from_entity(entity)))
    }

    /// Deletes a location.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No location with that id
    /// - `Err(DbErr)` - Database error, including foreign-key violation while in use
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Location::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        existing.delete(self.db).await?;

        Ok(true)
    }
}
