use crate::server::{data::message::MessageRepository, model::message::CreateMessageParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod file_paths;
mod get_paginated_by_channel;
mod update_content;
