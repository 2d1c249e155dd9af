use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(pk_auto(Faq::Id))
                    .col(text(Faq::Question))
                    .col(text(Faq::Answer))
                    .col(string(Faq::CreatedBy))
                    .col(string(Faq::ModifiedBy))
                    .col(
                        timestamp_with_time_zone(Faq::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Faq::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faq_created_by")
                            .from(Faq::Table, Faq::CreatedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faq_modified_by")
                            .from(Faq::Table, Faq::ModifiedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faq::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faq {
    Table,
    Id,
    Question,
    Answer,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    UpdatedAt,
}
