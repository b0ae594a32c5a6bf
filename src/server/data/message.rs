//! Message repository.

use chrono::Utc;
use entity::message::MessageKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::{CreateMessageParams, Message};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a text or file message and returns it with the author's username
    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            channel_id: ActiveValue::Set(params.channel_id),
            user_id: ActiveValue::Set(params.user_id),
            kind: ActiveValue::Set(params.kind),
            content: ActiveValue::Set(params.content),
            file_path: ActiveValue::Set(params.file_path),
            content_type: ActiveValue::Set(params.content_type),
            file_size: ActiveValue::Set(params.file_size),
            created_at: ActiveValue::Set(Utc::now()),
            edited_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Message with id {} not found after creation",
                entity.id
            )))
    }

    /// Gets a message by ID with its author's username
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let result = entity::prelude::Message::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(message, user)| {
            user.map(|u| Message::from_entity(message, u.username))
        }))
    }

    /// Gets paginated messages for a channel, newest first
    pub async fn get_paginated_by_channel(
        &self,
        channel_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Message>, u64), DbErr> {
        let paginator = entity::prelude::Message::find()
            .filter(entity::message::Column::ChannelId.eq(channel_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let messages = rows
            .into_iter()
            .filter_map(|(message, user)| user.map(|u| Message::from_entity(message, u.username)))
            .collect();

        Ok((messages, total))
    }

    /// Replaces the text of a message and stamps `edited_at`
    /// Returns None if the message doesn't exist
    pub async fn update_content(&self, id: i32, content: String) -> Result<Option<Message>, DbErr> {
        let Some(existing) = entity::prelude::Message::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::message::ActiveModel = existing.into();
        active.content = ActiveValue::Set(content);
        active.edited_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stored file names of all file messages in a channel
    pub async fn file_paths_by_channel(&self, channel_id: i32) -> Result<Vec<String>, DbErr> {
        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::ChannelId.eq(channel_id))
            .filter(entity::message::Column::Kind.eq(MessageKind::File))
            .all(self.db)
            .await?;

        Ok(messages.into_iter().filter_map(|m| m.file_path).collect())
    }

    /// Stored file names of all file messages posted by a user
    pub async fn file_paths_by_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::UserId.eq(user_id))
            .filter(entity::message::Column::Kind.eq(MessageKind::File))
            .all(self.db)
            .await?;

        Ok(messages.into_iter().filter_map(|m| m.file_path).collect())
    }
}
