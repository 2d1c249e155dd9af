use crate::server::{data::faq::FaqRepository, model::faq::FaqParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
