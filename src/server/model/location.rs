//! Location domain model and parameters.
//!
//! Locations are referenced by events and series; deleting one that is still in use
//! fails with a foreign-key violation.

use chrono::{DateTime, Utc};

use crate::{
    model::location::{LocationDto, LocationPayloadDto},
    server::error::{validation::require_text, AppError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub building: Option<String>,
    pub room: Option<String>,
    pub description: Option<String>,
    pub created_by: String,
    pub modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            building: entity.building,
            room: entity.room,
            description: entity.description,
            created_by: entity.created_by,
            modified_by: entity.modified_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            building: self.building,
            room: self.room,
            description: self.description,
            created_by: self.created_by,
            modified_by: self.modified_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationParams {
    pub name: String,
    pub building: Option<String>,
    pub room: Option<String>,
    pub description: Option<String>,
    pub actor: String,
}

impl LocationParams {
    pub fn from_dto(dto: LocationPayloadDto, actor: String) -> Result<Self, AppError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "name", &dto.name);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            name: dto.name.trim().to_string(),
            building: dto.building,
            room: dto.room,
            description: dto.description,
            actor,
        })
    }
}
