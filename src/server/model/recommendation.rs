//! Recommendation domain models and parameters.

use chrono::{DateTime, Utc};
use entity::recommendation::RecommendationSource;

use crate::{
    model::recommendation::{
        CreateRecommendationDto, PaginatedRecommendationsDto, RecommendationDto,
        RecommendationSourceDto,
    },
    server::model::category::normalize_description,
};

pub const MAX_EXTERNAL_ID_LENGTH: usize = 64;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_COMMENT_LENGTH: usize = 500;

/// A Spotify track or TMDb title shared in a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: i32,
    pub channel_id: i32,
    pub user_id: i32,
    pub username: String,
    pub source: RecommendationSource,
    pub external_id: String,
    pub title: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn from_entity(entity: entity::recommendation::Model, username: String) -> Self {
        Self {
            id: entity.id,
            channel_id: entity.channel_id,
            user_id: entity.user_id,
            username,
            source: entity.source,
            external_id: entity.external_id,
            title: entity.title,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> RecommendationDto {
        RecommendationDto {
            id: self.id,
            channel_id: self.channel_id,
            user_id: self.user_id,
            username: self.username,
            source: self.source.into(),
            external_id: self.external_id,
            title: self.title,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRecommendations {
    pub recommendations: Vec<Recommendation>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedRecommendations {
    pub fn into_dto(self) -> PaginatedRecommendationsDto {
        PaginatedRecommendationsDto {
            recommendations: self
                .recommendations
                .into_iter()
                .map(Recommendation::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRecommendationParams {
    pub channel_id: i32,
    pub user_id: i32,
    pub source: RecommendationSource,
    pub external_id: String,
    pub title: String,
    pub comment: Option<String>,
}

impl CreateRecommendationParams {
    pub fn from_dto(channel_id: i32, user_id: i32, dto: CreateRecommendationDto) -> Self {
        Self {
            channel_id,
            user_id,
            source: dto.source.into(),
            external_id: dto.external_id.trim().to_string(),
            title: dto.title.trim().to_string(),
            comment: normalize_description(dto.comment),
        }
    }
}

impl From<RecommendationSource> for RecommendationSourceDto {
    fn from(source: RecommendationSource) -> Self {
        match source {
            RecommendationSource::SpotifyTrack => RecommendationSourceDto::SpotifyTrack,
            RecommendationSource::TmdbMovie => RecommendationSourceDto::TmdbMovie,
            RecommendationSource::TmdbTv => RecommendationSourceDto::TmdbTv,
        }
    }
}

impl From<RecommendationSourceDto> for RecommendationSource {
    fn from(source: RecommendationSourceDto) -> Self {
        match source {
            RecommendationSourceDto::SpotifyTrack => RecommendationSource::SpotifyTrack,
            RecommendationSourceDto::TmdbMovie => RecommendationSource::TmdbMovie,
            RecommendationSourceDto::TmdbTv => RecommendationSource::TmdbTv,
        }
    }
}
