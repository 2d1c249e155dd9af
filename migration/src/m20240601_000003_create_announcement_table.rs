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
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcement::Id))
                    .col(string(Announcement::Title))
                    .col(text(Announcement::Body))
                    .col(string(Announcement::CreatedBy))
                    .col(string(Announcement::ModifiedBy))
                    .col(
                        timestamp_with_time_zone(Announcement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Announcement::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcement_created_by")
                            .from(Announcement::Table, Announcement::CreatedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcement_modified_by")
                            .from(Announcement::Table, Announcement::ModifiedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcement {
    Table,
    Id,
    Title,
    Body,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    UpdatedAt,
}
