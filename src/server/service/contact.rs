use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactRepository, error::AppError, model::contact::ContactMessage,
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the contact message, empty if it was never set.
    pub async fn get(&self) -> Result<ContactMessage, AppError> {
        Ok(ContactRepository::new(self.db)
            .get()
            .await?
            .unwrap_or_default())
    }

    pub async fn set(&self, message: String, actor: String) -> Result<ContactMessage, AppError> {
        Ok(ContactRepository::new(self.db).upsert(message, actor).await?)
    }
}
