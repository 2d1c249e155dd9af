//! Announcement data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::announcement::{Announcement, AnnouncementParams};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all announcements, newest first.
    pub async fn get_all(&self) -> Result<Vec<Announcement>, DbErr> {
        let entities = entity::prelude::Announcement::find()
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Announcement::from_entity).collect())
    }

    pub async fn create(&self, params: AnnouncementParams) -> Result<Announcement, DbErr> {
        let now = Utc::now();
        let entity = entity::announcement::ActiveModel {
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            created_by: ActiveValue::Set(params.actor.clone()),
            modified_by: ActiveValue::Set(params.actor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    /// Replaces title and body.
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - Updated announcement
    /// - `Ok(None)` - No announcement with that id
    pub async fn update(
        &self,
        id: i32,
        params: AnnouncementParams,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(existing) = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::announcement::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.body = ActiveValue::Set(params.body);
        active.modified_by = ActiveValue::Set(params.actor);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Announcement::from_entity(entity)))
    }

    /// Deletes an announcement, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
