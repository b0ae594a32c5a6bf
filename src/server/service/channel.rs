//! Channel service.
//!
//! Validates channel fields and category sets before they reach the repository, and
//! removes stored upload files when a channel is deleted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, channel::ChannelRepository, message::MessageRepository},
    error::AppError,
    model::{
        category::MAX_DESCRIPTION_LENGTH,
        channel::{
            Channel, CreateChannelParams, GetChannelsParams, PaginatedChannels,
            UpdateChannelParams, MAX_CHANNEL_CATEGORIES, MAX_CHANNEL_NAME_LENGTH,
        },
        total_pages,
    },
    util::{storage::FileStorage, validate},
};

pub struct ChannelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of channels ordered by name, optionally filtered by category and
    /// a case-insensitive name search.
    pub async fn list(&self, params: GetChannelsParams) -> Result<PaginatedChannels, AppError> {
        let (channels, total) = ChannelRepository::new(self.db)
            .get_paginated(&params)
            .await?;

        Ok(PaginatedChannels {
            channels,
            total,
            page: params.page,
            per_page: params.per_page,
            total_pages: total_pages(total, params.per_page),
        })
    }

    pub async fn get(&self, id: i32) -> Result<Channel, AppError> {
        ChannelRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Channel not found".to_string()))
    }

    /// Creates a channel with the creator as its Admin.
    ///
    /// # Returns
    /// - `Ok(Channel)` - The created channel
    /// - `Err(AppError::BadRequest)` - Invalid fields, more than 5 or unknown categories
    /// - `Err(AppError::Conflict)` - Name already used
    pub async fn create(&self, params: CreateChannelParams) -> Result<Channel, AppError> {
        self.validate(
            &params.name,
            params.description.as_deref(),
            &params.category_ids,
        )
        .await?;

        let repo = ChannelRepository::new(self.db);

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(
                "A channel with this name already exists".to_string(),
            ));
        }

        let channel = repo.create(params).await?;

        tracing::debug!("Created channel {} ({})", channel.name, channel.id);

        Ok(channel)
    }

    /// Updates a channel's fields and replaces its categories as a set.
    pub async fn update(&self, params: UpdateChannelParams) -> Result<Channel, AppError> {
        self.validate(
            &params.name,
            params.description.as_deref(),
            &params.category_ids,
        )
        .await?;

        let repo = ChannelRepository::new(self.db);

        if repo.name_taken(&params.name, Some(params.id)).await? {
            return Err(AppError::Conflict(
                "A channel with this name already exists".to_string(),
            ));
        }

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Channel not found".to_string()))
    }

    /// Deletes a channel with everything in it, then removes its stored files.
    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), AppError> {
        let files = MessageRepository::new(self.db)
            .file_paths_by_channel(id)
            .await?;

        if !ChannelRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Channel not found".to_string()));
        }

        storage.remove_all(&files).await;

        Ok(())
    }

    async fn validate(
        &self,
        name: &str,
        description: Option<&str>,
        category_ids: &[i32],
    ) -> Result<(), AppError> {
        validate::required_text("Name", name, MAX_CHANNEL_NAME_LENGTH)?;
        validate::optional_max_length("Description", description, MAX_DESCRIPTION_LENGTH)?;

        if category_ids.len() > MAX_CHANNEL_CATEGORIES {
            return Err(AppError::BadRequest(format!(
                "A channel can have at most {} categories",
                MAX_CHANNEL_CATEGORIES
            )));
        }

        let existing = CategoryRepository::new(self.db)
            .find_existing_ids(category_ids)
            .await?;
        if existing.len() != category_ids.len() {
            return Err(AppError::BadRequest(
                "Unknown category id".to_string(),
            ));
        }

        Ok(())
    }
}
