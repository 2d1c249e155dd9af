use crate::server::{
    data::event::EventRepository,
    model::{
        event::{CreateEventParams, EventRange, EventStatus},
        series::EventTemplate,
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod connect_to_series;
mod create;
mod delete;
mod get_in_range;
mod update_from_template;
