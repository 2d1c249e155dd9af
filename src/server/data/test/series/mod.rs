use crate::server::{
    data::series::SeriesRepository,
    model::{
        event::EventStatus,
        series::{Schedule, SeriesParams},
    },
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn params(location_id: i32, actor: &str) -> SeriesParams {
    SeriesParams {
        title: "Soldering basics".to_string(),
        summary: Some("Weekly intro".to_string()),
        description: None,
        facilitator: Some("Sam".to_string()),
        location_id,
        status: EventStatus::Tentative,
        schedule: Schedule {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            recurrence_frequency_weeks: 1,
            recurrence_frequency_days: vec![1, 3],
        },
        actor: actor.to_string(),
    }
}
