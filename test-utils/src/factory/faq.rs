//! FAQ factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a FAQ entry authored by `created_by`.
///
/// Defaults: question `"Question {id}?"`, answer `"Answer {id}"`.
pub async fn create_faq(
    db: &DatabaseConnection,
    created_by: &str,
) -> Result<entity::faq::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::faq::ActiveModel {
        question: ActiveValue::Set(format!("Question {}?", id)),
        answer: ActiveValue::Set(format!("Answer {}", id)),
        created_by: ActiveValue::Set(created_by.to_string()),
        modified_by: ActiveValue::Set(created_by.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
