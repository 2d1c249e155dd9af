use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_user_table::User, m20240601_000002_create_location_table::Location,
    m20240601_000005_create_series_table::Series,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::LocationId))
                    .col(timestamp_with_time_zone(Event::StartTime))
                    .col(timestamp_with_time_zone(Event::EndTime))
                    .col(string(Event::Summary))
                    .col(text_null(Event::Description))
                    .col(string_null(Event::Facilitator))
                    .col(string(Event::Status).default("tentative"))
                    .col(integer_null(Event::SeriesId))
                    .col(string(Event::CreatedBy))
                    .col(string(Event::ModifiedBy))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_location_id")
                            .from(Event::Table, Event::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_series_id")
                            .from(Event::Table, Event::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_created_by")
                            .from(Event::Table, Event::CreatedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_modified_by")
                            .from(Event::Table, Event::ModifiedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_start_time")
                    .table(Event::Table)
                    .col(Event::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    LocationId,
    StartTime,
    EndTime,
    Summary,
    Description,
    Facilitator,
    Status,
    SeriesId,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    UpdatedAt,
}
