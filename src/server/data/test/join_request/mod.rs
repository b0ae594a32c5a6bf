use crate::server::{
    data::join_request::JoinRequestRepository,
    model::join_request::{CreateJoinRequestParams, RequestDecision},
};
use entity::request::RequestStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_channel;
mod has_pending;
mod resolve;
