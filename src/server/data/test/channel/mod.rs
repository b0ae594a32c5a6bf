use crate::server::{
    data::channel::ChannelRepository,
    model::channel::{CreateChannelParams, GetChannelsParams, UpdateChannelParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
