//! Channel messages: text posts, file uploads and downloads, edits and deletes.
//!
//! File bytes live in `FileStorage`; the message row keeps the original file name as
//! its content and the stored name in `file_path`.

use entity::message::MessageKind;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{membership::MembershipRepository, message::MessageRepository},
    error::{auth::AuthError, AppError},
    model::{
        message::{
            CreateMessageParams, FileDownload, Message, PaginatedMessages, UploadFileParams,
            MAX_MESSAGE_LENGTH,
        },
        total_pages,
        user::User,
    },
    util::{storage::FileStorage, validate},
};

/// Longest original file name kept for a file message.
const MAX_FILE_NAME_LENGTH: usize = 255;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a FileStorage,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a FileStorage) -> Self {
        Self { db, storage }
    }

    /// Gets a page of a channel's messages, newest first
    pub async fn list(
        &self,
        channel_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMessages, AppError> {
        let (messages, total) = MessageRepository::new(self.db)
            .get_paginated_by_channel(channel_id, page, per_page)
            .await?;

        Ok(PaginatedMessages {
            messages,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Posts a text message; content is trimmed and must be 1 to 2000 characters.
    pub async fn post_text(
        &self,
        channel_id: i32,
        user_id: i32,
        content: &str,
    ) -> Result<Message, AppError> {
        let content = content.trim();
        validate::required_text("Message", content, MAX_MESSAGE_LENGTH)?;

        Ok(MessageRepository::new(self.db)
            .create(CreateMessageParams::text(
                channel_id,
                user_id,
                content.to_string(),
            ))
            .await?)
    }

    /// Stores an uploaded file and posts it as a file message.
    ///
    /// # Arguments
    /// - `params` - Upload metadata and bytes
    /// - `max_bytes` - Largest accepted file size
    ///
    /// # Returns
    /// - `Ok(Message)` - The created file message
    /// - `Err(AppError::BadRequest)` - Empty or oversized file
    pub async fn upload(
        &self,
        params: UploadFileParams,
        max_bytes: usize,
    ) -> Result<Message, AppError> {
        if params.bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if params.bytes.len() > max_bytes {
            return Err(AppError::BadRequest(format!(
                "File exceeds the maximum size of {} bytes",
                max_bytes
            )));
        }

        let file_name = sanitize_file_name(&params.file_name);
        let content_type = if params.content_type.trim().is_empty() {
            DEFAULT_CONTENT_TYPE.to_string()
        } else {
            params.content_type
        };
        let file_size = params.bytes.len() as i64;

        let stored_name = self.storage.save(&params.bytes).await?;

        let result = MessageRepository::new(self.db)
            .create(CreateMessageParams {
                channel_id: params.channel_id,
                user_id: params.user_id,
                kind: MessageKind::File,
                content: file_name,
                file_path: Some(stored_name.clone()),
                content_type: Some(content_type),
                file_size: Some(file_size),
            })
            .await;

        match result {
            Ok(message) => Ok(message),
            Err(e) => {
                self.storage.remove_all(&[stored_name]).await;
                Err(e.into())
            }
        }
    }

    /// Reads the stored file behind a file message.
    ///
    /// # Returns
    /// - `Ok(FileDownload)` - File bytes with name and content type
    /// - `Err(AppError::NotFound)` - Message not in this channel or file missing
    /// - `Err(AppError::BadRequest)` - Message is a text message
    pub async fn download(
        &self,
        channel_id: i32,
        message_id: i32,
    ) -> Result<FileDownload, AppError> {
        let message = self.get_in_channel(channel_id, message_id).await?;

        let (MessageKind::File, Some(file_path)) = (message.kind, message.file_path) else {
            return Err(AppError::BadRequest(
                "Message does not contain a file".to_string(),
            ));
        };

        let bytes = self.storage.read(&file_path).await?;

        Ok(FileDownload {
            file_name: message.content,
            content_type: message
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            bytes,
        })
    }

    /// Edits a text message. Only its author may edit it.
    pub async fn edit(
        &self,
        channel_id: i32,
        message_id: i32,
        user_id: i32,
        content: &str,
    ) -> Result<Message, AppError> {
        let message = self.get_in_channel(channel_id, message_id).await?;

        if message.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("User tried to edit message {} of another user", message_id),
            )
            .into());
        }
        if message.kind != MessageKind::Text {
            return Err(AppError::BadRequest(
                "Only text messages can be edited".to_string(),
            ));
        }

        let content = content.trim();
        validate::required_text("Message", content, MAX_MESSAGE_LENGTH)?;

        MessageRepository::new(self.db)
            .update_content(message_id, content.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    /// Deletes a message as its author, a channel admin or a global admin, and
    /// removes its stored file.
    pub async fn delete(
        &self,
        channel_id: i32,
        message_id: i32,
        actor: &User,
    ) -> Result<(), AppError> {
        let message = self.get_in_channel(channel_id, message_id).await?;

        if message.user_id != actor.id && !actor.admin {
            let is_channel_admin = MembershipRepository::new(self.db)
                .find(channel_id, actor.id)
                .await?
                .is_some_and(|m| m.is_admin());

            if !is_channel_admin {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("User tried to delete message {} of another user", message_id),
                )
                .into());
            }
        }

        MessageRepository::new(self.db).delete(message_id).await?;

        if let Some(file_path) = message.file_path {
            self.storage.remove_all(&[file_path]).await;
        }

        Ok(())
    }

    async fn get_in_channel(&self, channel_id: i32, message_id: i32) -> Result<Message, AppError> {
        MessageRepository::new(self.db)
            .get_by_id(message_id)
            .await?
            .filter(|m| m.channel_id == channel_id)
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }
}

/// Keeps only the final path component of a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() {
        return "file".to_string();
    }

    base.chars().take(MAX_FILE_NAME_LENGTH).collect()
}
