//! Message factory for creating text messages.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::message::MessageKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages. Builds text messages unless
/// `file()` is called.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: i32,
    user_id: i32,
    content: String,
    file: Option<(String, String, i64)>,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory for the given channel and author.
    ///
    /// Defaults:
    /// - content: `"Message {id}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, channel_id: i32, user_id: i32) -> Self {
        Self {
            db,
            channel_id,
            user_id,
            content: format!("Message {}", next_id()),
            file: None,
            created_at: Utc::now(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Turns the message into a file message stored as `file_path`.
    pub fn file(
        mut self,
        file_path: impl Into<String>,
        content_type: impl Into<String>,
        file_size: i64,
    ) -> Self {
        self.file = Some((file_path.into(), content_type.into(), file_size));
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        let (kind, file_path, content_type, file_size) = match self.file {
            Some((path, content_type, size)) => (
                MessageKind::File,
                Some(path),
                Some(content_type),
                Some(size),
            ),
            None => (MessageKind::Text, None, None, None),
        };

        entity::message::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(kind),
            content: ActiveValue::Set(self.content),
            file_path: ActiveValue::Set(file_path),
            content_type: ActiveValue::Set(content_type),
            file_size: ActiveValue::Set(file_size),
            created_at: ActiveValue::Set(self.created_at),
            edited_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a text message with default content.
pub async fn create_message(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, channel_id, user_id).build().await
}
