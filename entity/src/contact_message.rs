use sea_orm::entity::prelude::*;

/// Single-row table holding the lab's contact message.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub modified_by: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ModifiedBy",
        to = "super::user::Column::Email"
    )]
    Modifier,
}

impl ActiveModelBehavior for ActiveModel {}
