use crate::server::data::membership::MembershipRepository;
use entity::channel_user::ChannelRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_admins;
mod get_members;
mod set_role;
