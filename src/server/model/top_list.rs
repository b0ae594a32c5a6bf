//! Per-user Top 5 list domain models.

use entity::top_tmdb::TmdbMediaType;

use crate::model::top_list::{TmdbMediaTypeDto, TopSongDto, TopTmdbDto};

/// Maximum number of entries in a top list.
pub const MAX_TOP_ENTRIES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TopSong {
    pub spotify_id: String,
    pub position: i32,
}

impl TopSong {
    pub fn from_entity(entity: entity::top_song::Model) -> Self {
        Self {
            spotify_id: entity.spotify_id,
            position: entity.position,
        }
    }

    pub fn from_dto(dto: TopSongDto) -> Self {
        Self {
            spotify_id: dto.spotify_id.trim().to_string(),
            position: dto.position,
        }
    }

    pub fn into_dto(self) -> TopSongDto {
        TopSongDto {
            spotify_id: self.spotify_id,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopTmdb {
    pub tmdb_id: String,
    pub media_type: TmdbMediaType,
    pub position: i32,
}

impl TopTmdb {
    pub fn from_entity(entity: entity::top_tmdb::Model) -> Self {
        Self {
            tmdb_id: entity.tmdb_id,
            media_type: entity.media_type,
            position: entity.position,
        }
    }

    pub fn from_dto(dto: TopTmdbDto) -> Self {
        Self {
            tmdb_id: dto.tmdb_id.trim().to_string(),
            media_type: match dto.media_type {
                TmdbMediaTypeDto::Movie => TmdbMediaType::Movie,
                TmdbMediaTypeDto::Tv => TmdbMediaType::Tv,
            },
            position: dto.position,
        }
    }

    pub fn into_dto(self) -> TopTmdbDto {
        TopTmdbDto {
            tmdb_id: self.tmdb_id,
            media_type: match self.media_type {
                TmdbMediaType::Movie => TmdbMediaTypeDto::Movie,
                TmdbMediaType::Tv => TmdbMediaTypeDto::Tv,
            },
            position: self.position,
        }
    }
}
