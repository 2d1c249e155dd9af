//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    building: Option<String>,
    room: Option<String>,
    created_by: String,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Lab {id}"`
    /// - building: `Some("Science Hall")`
    /// - room: `Some("{id}")`
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `created_by` - Email of an existing user, used for both audit columns
    pub fn new(db: &'a DatabaseConnection, created_by: &str) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Lab {}", id),
            building: Some("Science Hall".to_string()),
            room: Some(id.to_string()),
            created_by: created_by.to_string(),
        }
    }

    /// Sets the location name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the building.
    pub fn building(mut self, building: Option<String>) -> Self {
        self.building = building;
        self
    }

    /// Builds and inserts the location entity into the database.
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        let now = Utc::now();
        entity::location::ActiveModel {
            name: ActiveValue::Set(self.name),
            building: ActiveValue::Set(self.building),
            room: ActiveValue::Set(self.room),
            description: ActiveValue::Set(None),
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

/// Creates a location with default values.
pub async fn create_location(
    db: &DatabaseConnection,
    created_by: &str,
) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db, created_by).build().await
}
