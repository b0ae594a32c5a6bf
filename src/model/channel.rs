use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChannelRoleDto {
    Admin,
    Member,
}

/// Category reference embedded in channel responses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChannelCategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChannelDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
    pub categories: Vec<ChannelCategoryDto>,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedChannelsDto {
    pub channels: Vec<ChannelDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateChannelDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateChannelDto {
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
    pub category_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MemberDto {
    pub user_id: i32,
    pub username: String,
    pub role: ChannelRoleDto,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SetRoleDto {
    pub role: ChannelRoleDto,
}
