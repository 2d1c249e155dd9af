//! Announcement factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an announcement authored by `created_by`.
///
/// Defaults: title `"Announcement {id}"`, body `"Body {id}"`.
pub async fn create_announcement(
    db: &DatabaseConnection,
    created_by: &str,
) -> Result<entity::announcement::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::announcement::ActiveModel {
        title: ActiveValue::Set(format!("Announcement {}", id)),
        body: ActiveValue::Set(format!("Body {}", id)),
        created_by: ActiveValue::Set(created_by.to_string()),
        modified_by: ActiveValue::Set(created_by.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
