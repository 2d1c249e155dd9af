use crate::server::{data::location::LocationRepository, model::location::LocationParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn params(name: &str, actor: &str) -> LocationParams {
    LocationParams {
        name: name.to_string(),
        building: Some("Engineering".to_string()),
        room: Some("B12".to_string()),
        description: None,
        actor: actor.to_string(),
    }
}
