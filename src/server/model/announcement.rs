//! Announcement domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::announcement::{AnnouncementDto, AnnouncementPayloadDto},
    server::error::{
        validation::{require_text, FieldError},
        AppError,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            created_by: entity.created_by,
            modified_by: entity.modified_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            body: self.body,
            created_by: self.created_by,
            modified_by: self.modified_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields written on create and update, plus the acting user's email.
#[derive(Debug, Clone)]
pub struct AnnouncementParams {
    pub title: String,
    pub body: String,
    pub actor: String,
}

impl AnnouncementParams {
    /// Converts the payload, rejecting a blank title or body.
    pub fn from_dto(dto: AnnouncementPayloadDto, actor: String) -> Result<Self, AppError> {
        let mut errors: Vec<FieldError> = Vec::new();
        require_text(&mut errors, "title", &dto.title);
        require_text(&mut errors, "body", &dto.body);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            title: dto.title,
            body: dto.body,
            actor,
        })
    }
}
