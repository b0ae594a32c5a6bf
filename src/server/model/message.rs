//! Message domain models and parameters.
//!
//! Messages are either plain text or uploaded files. For file messages `content` holds
//! the original file name and `file_path` the generated name inside the upload directory.

use chrono::{DateTime, Utc};
use entity::message::MessageKind;

use crate::model::message::{MessageDto, MessageKindDto, PaginatedMessagesDto};

/// Maximum length of a text message after trimming.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub channel_id: i32,
    pub user_id: i32,
    /// Username of the author.
    pub username: String,
    pub kind: MessageKind,
    pub content: String,
    pub file_path: Option<String>,
    pub content_type: Option<String>,
    pub file_size: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Converts a message entity and its author at the repository boundary.
    pub fn from_entity(entity: entity::message::Model, username: String) -> Self {
        Self {
            id: entity.id,
            channel_id: entity.channel_id,
            user_id: entity.user_id,
            username,
            kind: entity.kind,
            content: entity.content,
            file_path: entity.file_path,
            content_type: entity.content_type,
            file_size: entity.file_size,
            created_at: entity.created_at,
            edited_at: entity.edited_at,
        }
    }

    /// Stored file path is not exposed; clients download through the API.
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            channel_id: self.channel_id,
            user_id: self.user_id,
            username: self.username,
            kind: self.kind.into(),
            content: self.content,
            content_type: self.content_type,
            file_size: self.file_size,
            created_at: self.created_at,
            edited_at: self.edited_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMessages {
    pub messages: Vec<Message>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMessages {
    pub fn into_dto(self) -> PaginatedMessagesDto {
        PaginatedMessagesDto {
            messages: self.messages.into_iter().map(Message::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for inserting a message row.
#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub channel_id: i32,
    pub user_id: i32,
    pub kind: MessageKind,
    pub content: String,
    pub file_path: Option<String>,
    pub content_type: Option<String>,
    pub file_size: Option<i64>,
}

impl CreateMessageParams {
    pub fn text(channel_id: i32, user_id: i32, content: String) -> Self {
        Self {
            channel_id,
            user_id,
            kind: MessageKind::Text,
            content,
            file_path: None,
            content_type: None,
            file_size: None,
        }
    }
}

/// Uploaded file as received from the multipart body.
#[derive(Debug, Clone)]
pub struct UploadFileParams {
    pub channel_id: i32,
    pub user_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Stored file bytes with the metadata needed for the download response.
#[derive(Debug, Clone)]
pub struct FileDownload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl From<MessageKind> for MessageKindDto {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Text => MessageKindDto::Text,
            MessageKind::File => MessageKindDto::File,
        }
    }
}
