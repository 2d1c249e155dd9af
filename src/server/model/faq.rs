//! FAQ domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::faq::{FaqDto, FaqPayloadDto},
    server::error::{validation::require_text, AppError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Faq {
    pub fn from_entity(entity: entity::faq::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            created_by: entity.created_by,
            modified_by: entity.modified_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FaqDto {
        FaqDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            created_by: self.created_by,
            modified_by: self.modified_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FaqParams {
    pub question: String,
    pub answer: String,
    pub actor: String,
}

impl FaqParams {
    pub fn from_dto(dto: FaqPayloadDto, actor: String) -> Result<Self, AppError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "question", &dto.question);
        require_text(&mut errors, "answer", &dto.answer);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            question: dto.question,
            answer: dto.answer,
            actor,
        })
    }
}
