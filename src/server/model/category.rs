//! Category domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

pub const MAX_CATEGORY_NAME_LENGTH: usize = 64;
/// Shared by category and channel descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Topic category with the number of channels bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub channel_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The category entity from the database
    /// - `channel_count` - Number of channels bound to the category
    pub fn from_entity(entity: entity::category::Model, channel_count: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            channel_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            channel_count: self.channel_count,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: normalize_description(dto.description),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: normalize_description(dto.description),
        }
    }
}

/// Trims a description and turns blank text into `None`.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
