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
                    .table(ContactMessage::Table)
                    .if_not_exists()
                    .col(integer(ContactMessage::Id).primary_key())
                    .col(text(ContactMessage::Message))
                    .col(string_null(ContactMessage::ModifiedBy))
                    .col(
                        timestamp_with_time_zone(ContactMessage::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_message_modified_by")
                            .from(ContactMessage::Table, ContactMessage::ModifiedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactMessage {
    Table,
    Id,
    Message,
    ModifiedBy,
    UpdatedAt,
}
