use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSourceDto {
    SpotifyTrack,
    TmdbMovie,
    TmdbTv,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RecommendationDto {
    pub id: i32,
    pub channel_id: i32,
    pub user_id: i32,
    pub username: String,
    pub source: RecommendationSourceDto,
    pub external_id: String,
    pub title: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedRecommendationsDto {
    pub recommendations: Vec<RecommendationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRecommendationDto {
    pub source: RecommendationSourceDto,
    /// Spotify track ID or TMDb ID
    pub external_id: String,
    pub title: String,
    pub comment: Option<String>,
}
