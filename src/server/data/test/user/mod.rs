use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials_by_login;
mod get_all_paginated;
mod set_admin;
mod username_taken;
