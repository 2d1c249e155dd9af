use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    model::announcement::{Announcement, AnnouncementParams},
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Announcement>, AppError> {
        Ok(AnnouncementRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, params: AnnouncementParams) -> Result<Announcement, AppError> {
        Ok(AnnouncementRepository::new(self.db).create(params).await?)
    }

    /// Updates an announcement.
    /// Returns None if the announcement doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: AnnouncementParams,
    ) -> Result<Option<Announcement>, AppError> {
        Ok(AnnouncementRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes an announcement.
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(AnnouncementRepository::new(self.db).delete(id).await?)
    }
}
