//! Contact message domain model.

use chrono::{DateTime, Utc};

use crate::model::contact::ContactDto;

/// The lab's contact message. `None` fields mean it was never set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub message: String,
    pub modified_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContactMessage {
    pub fn from_entity(entity: entity::contact_message::Model) -> Self {
        Self {
            message: entity.message,
            modified_by: entity.modified_by,
            updated_at: Some(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            message: self.message,
            modified_by: self.modified_by,
            updated_at: self.updated_at,
        }
    }
}
