//! Channel data repository.
//!
//! Provides `ChannelRepository` for channel rows together with their category bindings.
//! Every read returns the channel enriched with its bound categories and member count,
//! loaded in batch queries and assembled in memory.

use chrono::Utc;
use entity::channel_user::ChannelRole;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::channel::{
    Channel, CreateChannelParams, GetChannelsParams, UpdateChannelParams,
};

pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a channel, binds its categories and makes the creator its Admin.
    ///
    /// All inserts run in a single transaction.
    ///
    /// # Arguments
    /// - `params` - Channel fields, deduplicated category IDs and the creator's user ID
    ///
    /// # Returns
    /// - `Ok(Channel)` - The created channel with categories and a member count of 1
    /// - `Err(DbErr)` - Database error, including unknown category foreign keys
    pub async fn create(&self, params: CreateChannelParams) -> Result<Channel, DbErr> {
        let txn = self.db.begin().await?;

        let channel = entity::channel::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            is_private: ActiveValue::Set(params.is_private),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for category_id in params.category_ids {
            entity::bind_channel_category::ActiveModel {
                channel_id: ActiveValue::Set(channel.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(&txn)
            .await?;
        }

        entity::channel_user::ActiveModel {
            channel_id: ActiveValue::Set(channel.id),
            user_id: ActiveValue::Set(params.creator_id),
            role: ActiveValue::Set(ChannelRole::Admin),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        self.get_by_id(channel.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Channel with id {} not found after creation",
                channel.id
            )))
    }

    /// Gets a channel by ID with categories and member count
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Channel>, DbErr> {
        let Some(entity) = entity::prelude::Channel::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![entity]).await?.pop())
    }

    /// Gets the channels with the given IDs ordered by name. Unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Channel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Channel::find()
            .filter(entity::channel::Column::Id.is_in(ids))
            .order_by_asc(entity::channel::Column::Name)
            .all(self.db)
            .await?;

        self.load_relations(entities).await
    }

    /// Gets a page of channels ordered by name.
    ///
    /// # Arguments
    /// - `params` - Page selection plus optional category filter and name search
    ///
    /// # Returns
    /// - `Ok((Vec<Channel>, u64))` - Channels on the page and total matching channels
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        params: &GetChannelsParams,
    ) -> Result<(Vec<Channel>, u64), DbErr> {
        let mut query = entity::prelude::Channel::find();

        if let Some(category_id) = params.category_id {
            let channel_ids: Vec<i32> = entity::prelude::BindChannelCategory::find()
                .filter(entity::bind_channel_category::Column::CategoryId.eq(category_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|b| b.channel_id)
                .collect();

            if channel_ids.is_empty() {
                return Ok((Vec::new(), 0));
            }

            query = query.filter(entity::channel::Column::Id.is_in(channel_ids));
        }

        if let Some(search) = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            // SQLite LIKE matches ASCII letters case-insensitively
            let pattern = format!("%{}%", escape_like(search));
            query = query.filter(
                entity::channel::Column::Name.like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let paginator = query
            .order_by_asc(entity::channel::Column::Name)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.page).await?;

        let channels = self.load_relations(entities).await?;

        Ok((channels, total))
    }

    /// Updates a channel and replaces its category bindings in one transaction
    /// Returns None if the channel doesn't exist
    pub async fn update(&self, params: UpdateChannelParams) -> Result<Option<Channel>, DbErr> {
        let Some(existing) = entity::prelude::Channel::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let mut active: entity::channel::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.is_private = ActiveValue::Set(params.is_private);
        active.update(&txn).await?;

        entity::prelude::BindChannelCategory::delete_many()
            .filter(entity::bind_channel_category::Column::ChannelId.eq(params.id))
            .exec(&txn)
            .await?;

        for category_id in params.category_ids {
            entity::bind_channel_category::ActiveModel {
                channel_id: ActiveValue::Set(params.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a channel.
    ///
    /// Bindings, memberships, messages and recommendations cascade. Join requests for
    /// the channel are removed explicitly, in the same transaction, since only their
    /// binding rows reference it.
    /// Stored files must be cleaned up by the caller.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let request_ids: Vec<i32> = entity::prelude::BindRequestChannelUser::find()
            .filter(entity::bind_request_channel_user::Column::ChannelId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|b| b.request_id)
            .collect();

        if !request_ids.is_empty() {
            entity::prelude::Request::delete_many()
                .filter(entity::request::Column::Id.is_in(request_ids))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::Channel::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a channel name is used by a channel other than `exclude_id`
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Channel::find().filter(entity::channel::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::channel::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Loads categories and member counts for a batch of channels, keeping input order.
    async fn load_relations(
        &self,
        entities: Vec<entity::channel::Model>,
    ) -> Result<Vec<Channel>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let channel_ids: Vec<i32> = entities.iter().map(|c| c.id).collect();

        let bindings = entity::prelude::BindChannelCategory::find()
            .filter(entity::bind_channel_category::Column::ChannelId.is_in(channel_ids.clone()))
            .all(self.db)
            .await?;

        let category_ids: Vec<i32> = bindings.iter().map(|b| b.category_id).collect();
        let categories_map: HashMap<i32, entity::category::Model> = if !category_ids.is_empty() {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        } else {
            HashMap::new()
        };

        let mut categories_by_channel: HashMap<i32, Vec<entity::category::Model>> = HashMap::new();
        for binding in bindings {
            if let Some(category) = categories_map.get(&binding.category_id) {
                categories_by_channel
                    .entry(binding.channel_id)
                    .or_default()
                    .push(category.clone());
            }
        }

        let mut member_counts: HashMap<i32, u64> = HashMap::new();
        for membership in entity::prelude::ChannelUser::find()
            .filter(entity::channel_user::Column::ChannelId.is_in(channel_ids))
            .all(self.db)
            .await?
        {
            *member_counts.entry(membership.channel_id).or_default() += 1;
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let categories = categories_by_channel.remove(&entity.id).unwrap_or_default();
                let member_count = member_counts.get(&entity.id).copied().unwrap_or(0);
                Channel::from_entity(entity, categories, member_count)
            })
            .collect())
    }
}

/// Escapes LIKE wildcards with a backslash so `search` matches literally.
fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
