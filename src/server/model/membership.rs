//! Channel membership domain models.

use chrono::{DateTime, Utc};
use entity::channel_user::ChannelRole;

use crate::{
    model::{channel::MemberDto, user::UserChannelDto},
    server::model::channel::Channel,
};

/// A user's membership row in a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub channel_id: i32,
    pub user_id: i32,
    pub role: ChannelRole,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    pub fn from_entity(entity: entity::channel_user::Model) -> Self {
        Self {
            channel_id: entity.channel_id,
            user_id: entity.user_id,
            role: entity.role,
            joined_at: entity.joined_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ChannelRole::Admin
    }
}

/// Channel member with the username needed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub user_id: i32,
    pub username: String,
    pub role: ChannelRole,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::channel_user::Model, user: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            username: user.username,
            role: entity.role,
            joined_at: entity.joined_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            user_id: self.user_id,
            username: self.username,
            role: self.role.into(),
            joined_at: self.joined_at,
        }
    }
}

/// A channel seen from one of its members.
#[derive(Debug, Clone, PartialEq)]
pub struct UserChannel {
    pub channel: Channel,
    pub role: ChannelRole,
    pub joined_at: DateTime<Utc>,
}

impl UserChannel {
    pub fn into_dto(self) -> UserChannelDto {
        UserChannelDto {
            channel: self.channel.into_dto(),
            role: self.role.into(),
            joined_at: self.joined_at,
        }
    }
}
