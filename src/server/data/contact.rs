//! Contact message repository.
//!
//! The message lives in a single row with a fixed id.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::contact::ContactMessage;

const CONTACT_ROW_ID: i32 = 1;

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored message, if one was ever set.
    pub async fn get(&self) -> Result<Option<ContactMessage>, DbErr> {
        let entity = entity::prelude::ContactMessage::find_by_id(CONTACT_ROW_ID)
            .one(self.db)
            .await?;

        Ok(entity.map(ContactMessage::from_entity))
    }

    /// Inserts or replaces the message.
    ///
    /// # Arguments
    /// - `message` - New message text
    /// - `actor` - Email of the user setting it
    pub async fn upsert(&self, message: String, actor: String) -> Result<ContactMessage, DbErr> {
        let entity = entity::prelude::ContactMessage::insert(entity::contact_message::ActiveModel {
            id: ActiveValue::Set(CONTACT_ROW_ID),
            message: ActiveValue::Set(message),
            modified_by: ActiveValue::Set(Some(actor)),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::contact_message::Column::Id)
                .update_columns([
                    entity::contact_message::Column::Message,
                    entity::contact_message::Column::ModifiedBy,
                    entity::contact_message::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ContactMessage::from_entity(entity))
    }
}
