//! FAQ data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::faq::{Faq, FaqParams};

pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all FAQ entries in creation order.
    pub async fn get_all(&self) -> Result<Vec<Faq>, DbErr> {
        let entities = entity::prelude::Faq::find()
            .order_by_asc(entity::faq::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Faq::from_entity).collect())
    }

    pub async fn create(&self, params: FaqParams) -> Result<Faq, DbErr> {
        let now = Utc::now();
        let entity = entity::faq::ActiveModel {
            question: ActiveValue::Set(params.question),
            answer: ActiveValue::Set(params.answer),
            created_by: ActiveValue::Set(params.actor.clone()),
            modified_by: ActiveValue::Set(params.actor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Faq::from_entity(entity))
    }

    pub async fn update(&self, id: i32, params: FaqParams) -> Result<Option<Faq>, DbErr> {
        let Some(existing) = entity::prelude::Faq::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::faq::ActiveModel = existing.into();
        active.question = ActiveValue::Set(params.question);
        active.answer = ActiveValue::Set(params.answer);
        active.modified_by = ActiveValue::Set(params.actor);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Faq::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Faq::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
