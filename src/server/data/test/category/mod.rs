use crate::server::{
    data::category::CategoryRepository,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_existing_ids;
mod get_all;
mod update;
