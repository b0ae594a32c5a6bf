use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::channel::{ChannelDto, ChannelRoleDto};

/// Public profile of a user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub bio: Option<String>,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Profile of the logged-in user, including their email.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CurrentUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateProfileDto {
    pub username: String,
    pub bio: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

/// A channel the user belongs to, with their role in it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserChannelDto {
    pub channel: ChannelDto,
    pub role: ChannelRoleDto,
    pub joined_at: DateTime<Utc>,
}
