//! Recommendation factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::recommendation::RecommendationSource;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recommendations.
pub struct RecommendationFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: i32,
    user_id: i32,
    source: RecommendationSource,
    external_id: String,
    title: String,
    comment: Option<String>,
}

impl<'a> RecommendationFactory<'a> {
    /// Creates a new RecommendationFactory.
    ///
    /// Defaults:
    /// - source: `SpotifyTrack`
    /// - external_id: `"track{id}"`
    /// - title: `"Track {id}"`
    /// - comment: `None`
    pub fn new(db: &'a DatabaseConnection, channel_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            channel_id,
            user_id,
            source: RecommendationSource::SpotifyTrack,
            external_id: format!("track{}", id),
            title: format!("Track {}", id),
            comment: None,
        }
    }

    pub fn source(mut self, source: RecommendationSource) -> Self {
        self.source = source;
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub async fn build(self) -> Result<entity::recommendation::Model, DbErr> {
        entity::recommendation::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            user_id: ActiveValue::Set(self.user_id),
            source: ActiveValue::Set(self.source),
            external_id: ActiveValue::Set(self.external_id),
            title: ActiveValue::Set(self.title),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Spotify track recommendation with default values.
pub async fn create_recommendation(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
) -> Result<entity::recommendation::Model, DbErr> {
    RecommendationFactory::new(db, channel_id, user_id)
        .build()
        .await
}
