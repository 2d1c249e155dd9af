use crate::server::{
    data::user::UserRepository,
    model::auth::{Role, RoleSet},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod set_last_logout;
mod update_roles;
