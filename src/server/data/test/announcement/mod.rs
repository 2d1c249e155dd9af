use crate::server::{
    data::announcement::AnnouncementRepository, model::announcement::AnnouncementParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
