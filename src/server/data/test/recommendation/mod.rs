use crate::server::{
    data::recommendation::RecommendationRepository,
    model::recommendation::CreateRecommendationParams,
};
use entity::recommendation::RecommendationSource;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod get_paginated_by_channel;
