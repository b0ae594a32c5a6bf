//! Recommendations of Spotify tracks and TMDb titles inside a channel.

use entity::recommendation::RecommendationSource;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{membership::MembershipRepository, recommendation::RecommendationRepository},
    error::{auth::AuthError, AppError},
    model::{
        recommendation::{
            CreateRecommendationParams, PaginatedRecommendations, Recommendation,
            MAX_COMMENT_LENGTH, MAX_EXTERNAL_ID_LENGTH, MAX_TITLE_LENGTH,
        },
        total_pages,
        user::User,
    },
    util::validate,
};

pub struct RecommendationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of a channel's recommendations, newest first
    pub async fn list(
        &self,
        channel_id: i32,
        source: Option<RecommendationSource>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedRecommendations, AppError> {
        let (recommendations, total) = RecommendationRepository::new(self.db)
            .get_paginated_by_channel(channel_id, source, page, per_page)
            .await?;

        Ok(PaginatedRecommendations {
            recommendations,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Recommends an item in a channel.
    ///
    /// # Returns
    /// - `Ok(Recommendation)` - The new recommendation
    /// - `Err(AppError::BadRequest)` - External ID, title or comment fails validation
    /// - `Err(AppError::Conflict)` - The item was already recommended in this channel
    pub async fn create(
        &self,
        params: CreateRecommendationParams,
    ) -> Result<Recommendation, AppError> {
        validate::required_text("External id", &params.external_id, MAX_EXTERNAL_ID_LENGTH)?;
        validate::required_text("Title", &params.title, MAX_TITLE_LENGTH)?;
        validate::optional_max_length("Comment", params.comment.as_deref(), MAX_COMMENT_LENGTH)?;

        let repo = RecommendationRepository::new(self.db);

        if repo
            .exists(params.channel_id, params.source, &params.external_id)
            .await?
        {
            return Err(AppError::Conflict(
                "This item was already recommended in the channel".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    /// Deletes a recommendation as its author, a channel admin or a global admin.
    pub async fn delete(
        &self,
        channel_id: i32,
        recommendation_id: i32,
        actor: &User,
    ) -> Result<(), AppError> {
        let repo = RecommendationRepository::new(self.db);

        let recommendation = repo
            .get_by_id(recommendation_id)
            .await?
            .filter(|r| r.channel_id == channel_id)
            .ok_or_else(|| AppError::NotFound("Recommendation not found".to_string()))?;

        if recommendation.user_id != actor.id && !actor.admin {
            let is_channel_admin = MembershipRepository::new(self.db)
                .find(channel_id, actor.id)
                .await?
                .is_some_and(|m| m.is_admin());

            if !is_channel_admin {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!(
                        "User tried to delete recommendation {} of another user",
                        recommendation_id
                    ),
                )
                .into());
            }
        }

        repo.delete(recommendation_id).await?;

        Ok(())
    }
}
