//! Recommendation repository.

use chrono::Utc;
use entity::recommendation::RecommendationSource;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::recommendation::{CreateRecommendationParams, Recommendation};

pub struct RecommendationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateRecommendationParams,
    ) -> Result<Recommendation, DbErr> {
        let entity = entity::recommendation::ActiveModel {
            channel_id: ActiveValue::Set(params.channel_id),
            user_id: ActiveValue::Set(params.user_id),
            source: ActiveValue::Set(params.source),
            external_id: ActiveValue::Set(params.external_id),
            title: ActiveValue::Set(params.title),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Recommendation with id {} not found after creation",
                entity.id
            )))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Recommendation>, DbErr> {
        let result = entity::prelude::Recommendation::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(recommendation, user)| {
            user.map(|u| Recommendation::from_entity(recommendation, u.username))
        }))
    }

    /// Checks whether the item was already recommended in the channel
    pub async fn exists(
        &self,
        channel_id: i32,
        source: RecommendationSource,
        external_id: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Recommendation::find()
            .filter(entity::recommendation::Column::ChannelId.eq(channel_id))
            .filter(entity::recommendation::Column::Source.eq(source))
            .filter(entity::recommendation::Column::ExternalId.eq(external_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated recommendations for a channel, newest first, optionally by source
    pub async fn get_paginated_by_channel(
        &self,
        channel_id: i32,
        source: Option<RecommendationSource>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Recommendation>, u64), DbErr> {
        let mut query = entity::prelude::Recommendation::find()
            .filter(entity::recommendation::Column::ChannelId.eq(channel_id));

        if let Some(source) = source {
            query = query.filter(entity::recommendation::Column::Source.eq(source));
        }

        let paginator = query
            .order_by_desc(entity::recommendation::Column::CreatedAt)
            .order_by_desc(entity::recommendation::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let recommendations = rows
            .into_iter()
            .filter_map(|(recommendation, user)| {
                user.map(|u| Recommendation::from_entity(recommendation, u.username))
            })
            .collect();

        Ok((recommendations, total))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Recommendation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
