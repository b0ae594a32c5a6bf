use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageKindDto {
    Text,
    File,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub channel_id: i32,
    pub user_id: i32,
    pub username: String,
    pub kind: MessageKindDto,
    /// Message text, or the original file name for file messages
    pub content: String,
    pub content_type: Option<String>,
    pub file_size: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedMessagesDto {
    pub messages: Vec<MessageDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMessageDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateMessageDto {
    pub content: String,
}

/// Multipart form accepted by the upload endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadFileForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
