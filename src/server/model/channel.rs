//! Channel domain models and parameters.
//!
//! Channels are topic rooms bound to up to five categories. The list and detail views
//! carry the bound categories and the current member count.

use chrono::{DateTime, Utc};
use entity::channel_user::ChannelRole;

use crate::{
    model::channel::{
        ChannelCategoryDto, ChannelDto, ChannelRoleDto, CreateChannelDto, PaginatedChannelsDto,
        UpdateChannelDto,
    },
    server::model::category::normalize_description,
};

/// Maximum number of categories a channel can be bound to.
pub const MAX_CHANNEL_CATEGORIES: usize = 5;

pub const MAX_CHANNEL_NAME_LENGTH: usize = 64;

/// Category reference attached to a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCategory {
    pub id: i32,
    pub name: String,
}

/// Channel with its categories and member count.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Private channels are joined through join requests only.
    pub is_private: bool,
    /// Bound categories ordered by name.
    pub categories: Vec<ChannelCategory>,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Converts an entity model plus its loaded relations at the repository boundary.
    pub fn from_entity(
        entity: entity::channel::Model,
        categories: Vec<entity::category::Model>,
        member_count: u64,
    ) -> Self {
        let mut categories: Vec<ChannelCategory> = categories
            .into_iter()
            .map(|c| ChannelCategory {
                id: c.id,
                name: c.name,
            })
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            is_private: entity.is_private,
            categories,
            member_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            name: self.name,
            description: self.description,
            is_private: self.is_private,
            categories: self
                .categories
                .into_iter()
                .map(|c| ChannelCategoryDto {
                    id: c.id,
                    name: c.name,
                })
                .collect(),
            member_count: self.member_count,
            created_at: self.created_at,
        }
    }
}

/// Filters and page selection for listing channels.
#[derive(Debug, Clone, Default)]
pub struct GetChannelsParams {
    pub page: u64,
    pub per_page: u64,
    /// Only channels bound to this category.
    pub category_id: Option<i32>,
    /// Case-insensitive substring of the channel name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedChannels {
    pub channels: Vec<Channel>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedChannels {
    pub fn into_dto(self) -> PaginatedChannelsDto {
        PaginatedChannelsDto {
            channels: self.channels.into_iter().map(Channel::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating a channel. The creator becomes its first Admin.
#[derive(Debug, Clone)]
pub struct CreateChannelParams {
    pub creator_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
    pub category_ids: Vec<i32>,
}

impl CreateChannelParams {
    pub fn from_dto(creator_id: i32, dto: CreateChannelDto) -> Self {
        Self {
            creator_id,
            name: dto.name.trim().to_string(),
            description: normalize_description(dto.description),
            is_private: dto.is_private,
            category_ids: dedup_ids(dto.category_ids),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateChannelParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
    /// Replaces the channel's current category set.
    pub category_ids: Vec<i32>,
}

impl UpdateChannelParams {
    pub fn from_dto(id: i32, dto: UpdateChannelDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: normalize_description(dto.description),
            is_private: dto.is_private,
            category_ids: dedup_ids(dto.category_ids),
        }
    }
}

/// Removes repeated ids while keeping the first occurrence order.
fn dedup_ids(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

impl From<ChannelRole> for ChannelRoleDto {
    fn from(role: ChannelRole) -> Self {
        match role {
            ChannelRole::Admin => ChannelRoleDto::Admin,
            ChannelRole::Member => ChannelRoleDto::Member,
        }
    }
}

impl From<ChannelRoleDto> for ChannelRole {
    fn from(role: ChannelRoleDto) -> Self {
        match role {
            ChannelRoleDto::Admin => ChannelRole::Admin,
            ChannelRoleDto::Member => ChannelRole::Member,
        }
    }
}
