use sea_orm::DatabaseConnection;

use crate::server::{
    data::location::LocationRepository,
    error::AppError,
    model::location::{Location, LocationParams},
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Location>, AppError> {
        Ok(LocationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Location>, AppError> {
        Ok(LocationRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, params: LocationParams) -> Result<Location, AppError> {
        Ok(LocationRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: LocationParams,
    ) -> Result<Option<Location>, AppError> {
        Ok(LocationRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a location.
    ///
    /// Fails with a foreign-key violation (400) while events or series use it.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(LocationRepository::new(self.db).delete(id).await?)
    }
}
