use sea_orm::DatabaseConnection;

use crate::server::{
    data::faq::FaqRepository,
    error::AppError,
    model::faq::{Faq, FaqParams},
};

pub struct FaqService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Faq>, AppError> {
        Ok(FaqRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, params: FaqParams) -> Result<Faq, AppError> {
        Ok(FaqRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: FaqParams) -> Result<Option<Faq>, AppError> {
        Ok(FaqRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(FaqRepository::new(self.db).delete(id).await?)
    }
}
