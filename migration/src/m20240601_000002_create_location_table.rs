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
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(string_uniq(Location::Name))
                    .col(string_null(Location::Building))
                    .col(string_null(Location::Room))
                    .col(text_null(Location::Description))
                    .col(string(Location::CreatedBy))
                    .col(string(Location::ModifiedBy))
                    .col(
                        timestamp_with_time_zone(Location::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Location::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_created_by")
                            .from(Location::Table, Location::CreatedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_modified_by")
                            .from(Location::Table, Location::ModifiedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    Name,
    Building,
    Room,
    Description,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    UpdatedAt,
}
