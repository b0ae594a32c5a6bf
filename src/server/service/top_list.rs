//! Per-user Top 5 lists of Spotify songs and TMDb titles.
//!
//! A list is always replaced as a whole. Positions run from 1 to 5 and may have gaps.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{top_list::TopListRepository, user::UserRepository},
    error::AppError,
    model::top_list::{TopSong, TopTmdb, MAX_TOP_ENTRIES},
    util::validate,
};

const MAX_TOP_ID_LENGTH: usize = 64;

pub struct TopListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_songs(&self, user_id: i32) -> Result<Vec<TopSong>, AppError> {
        self.require_user(user_id).await?;
        Ok(TopListRepository::new(self.db).get_songs(user_id).await?)
    }

    pub async fn get_tmdb(&self, user_id: i32) -> Result<Vec<TopTmdb>, AppError> {
        self.require_user(user_id).await?;
        Ok(TopListRepository::new(self.db).get_tmdb(user_id).await?)
    }

    /// Replaces the user's top songs.
    ///
    /// # Returns
    /// - `Ok(Vec<TopSong>)` - The stored list ordered by position
    /// - `Err(AppError::BadRequest)` - Too many entries, bad or repeated positions,
    ///   empty or repeated Spotify IDs
    pub async fn replace_songs(
        &self,
        user_id: i32,
        entries: Vec<TopSong>,
    ) -> Result<Vec<TopSong>, AppError> {
        validate_positions(entries.iter().map(|e| e.position))?;

        let mut ids = HashSet::new();
        for entry in &entries {
            validate::required_text("Spotify id", &entry.spotify_id, MAX_TOP_ID_LENGTH)?;
            if !ids.insert(entry.spotify_id.as_str()) {
                return Err(AppError::BadRequest(
                    "The same song is listed more than once".to_string(),
                ));
            }
        }

        Ok(TopListRepository::new(self.db)
            .replace_songs(user_id, entries)
            .await?)
    }

    /// Replaces the user's top TMDb titles.
    ///
    /// Same rules as `replace_songs`; a TMDb ID may appear once as a movie and once
    /// as a TV show since the two are separate TMDb namespaces.
    pub async fn replace_tmdb(
        &self,
        user_id: i32,
        entries: Vec<TopTmdb>,
    ) -> Result<Vec<TopTmdb>, AppError> {
        validate_positions(entries.iter().map(|e| e.position))?;

        let mut ids = HashSet::new();
        for entry in &entries {
            validate::required_text("TMDb id", &entry.tmdb_id, MAX_TOP_ID_LENGTH)?;
            if !ids.insert((entry.media_type, entry.tmdb_id.as_str())) {
                return Err(AppError::BadRequest(
                    "The same title is listed more than once".to_string(),
                ));
            }
        }

        Ok(TopListRepository::new(self.db)
            .replace_tmdb(user_id, entries)
            .await?)
    }

    pub async fn remove_song(&self, user_id: i32, position: i32) -> Result<(), AppError> {
        if !TopListRepository::new(self.db)
            .remove_song(user_id, position)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "No song at position {}",
                position
            )));
        }

        Ok(())
    }

    pub async fn remove_tmdb(&self, user_id: i32, position: i32) -> Result<(), AppError> {
        if !TopListRepository::new(self.db)
            .remove_tmdb(user_id, position)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "No title at position {}",
                position
            )));
        }

        Ok(())
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}

/// Checks list size, position range and position uniqueness.
fn validate_positions(positions: impl ExactSizeIterator<Item = i32>) -> Result<(), AppError> {
    if positions.len() > MAX_TOP_ENTRIES {
        return Err(AppError::BadRequest(format!(
            "A top list can have at most {} entries",
            MAX_TOP_ENTRIES
        )));
    }

    let mut seen = HashSet::new();
    for position in positions {
        if !(1..=MAX_TOP_ENTRIES as i32).contains(&position) {
            return Err(AppError::BadRequest(format!(
                "Positions must be between 1 and {}",
                MAX_TOP_ENTRIES
            )));
        }
        if !seen.insert(position) {
            return Err(AppError::BadRequest(format!(
                "Position {} is used more than once",
                position
            )));
        }
    }

    Ok(())
}
