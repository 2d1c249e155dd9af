use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_user_table::User, m20240601_000002_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(pk_auto(Series::Id))
                    .col(string(Series::Title))
                    .col(text_null(Series::Summary))
                    .col(text_null(Series::Description))
                    .col(string_null(Series::Facilitator))
                    .col(integer(Series::LocationId))
                    .col(time(Series::StartTime))
                    .col(time(Series::EndTime))
                    .col(date(Series::StartDate))
                    .col(date(Series::EndDate))
                    .col(string(Series::Status).default("tentative"))
                    .col(integer(Series::RecurrenceFrequencyWeeks))
                    .col(text(Series::RecurrenceFrequencyDays))
                    .col(string(Series::CreatedBy))
                    .col(string(Series::ModifiedBy))
                    .col(
                        timestamp_with_time_zone(Series::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Series::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_series_location_id")
                            .from(Series::Table, Series::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_series_created_by")
                            .from(Series::Table, Series::CreatedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_series_modified_by")
                            .from(Series::Table, Series::ModifiedBy)
                            .to(User::Table, User::Email)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Series {
    Table,
    Id,
    Title,
    Summary,
    Description,
    Facilitator,
    LocationId,
    StartTime,
    EndTime,
    StartDate,
    EndDate,
    Status,
    RecurrenceFrequencyWeeks,
    RecurrenceFrequencyDays,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    UpdatedAt,
}
