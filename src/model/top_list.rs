use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TmdbMediaTypeDto {
    Movie,
    Tv,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopSongDto {
    pub spotify_id: String,
    /// Rank from 1 to 5
    pub position: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopTmdbDto {
    pub tmdb_id: String,
    pub media_type: TmdbMediaTypeDto,
    /// Rank from 1 to 5
    pub position: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReplaceTopSongsDto {
    pub entries: Vec<TopSongDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReplaceTopTmdbDto {
    pub entries: Vec<TopTmdbDto>,
}
