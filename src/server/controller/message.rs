use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        message::{
            CreateMessageDto, MessageDto, PaginatedMessagesDto, UpdateMessageDto, UploadFileForm,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::message::UploadFileParams,
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Name of the multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// Get paginated messages of a channel, newest first.
///
/// # Access Control
/// - `ChannelMember` - Channel members and global admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `channel_id` - Channel to read
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Page of messages with author usernames
/// - `403 Forbidden` - Not a member of the channel
/// - `404 Not Found` - Channel not found
#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved messages", body = PaginatedMessagesDto),
        (status = 403, description = "Not a channel member", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let messages = MessageService::new(&state.db, &state.storage)
        .list(channel_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(messages.into_dto())))
}

/// Post a text message.
///
/// # Access Control
/// - `ChannelMember` - Channel members and global admins
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message posted", body = MessageDto),
        (status = 400, description = "Empty or too long message", body = ErrorDto),
        (status = 403, description = "Not a channel member", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_message(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let message = MessageService::new(&state.db, &state.storage)
        .post_text(channel_id, user.id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Upload a file as a message.
///
/// The file is sent as the multipart field `file`. Its original name and content
/// type are kept for the download.
///
/// # Access Control
/// - `ChannelMember` - Channel members and global admins
///
/// # Returns
/// - `201 Created` - The file message
/// - `400 Bad Request` - Missing, empty or oversized file
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/messages/upload",
    tag = MESSAGE_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    request_body(content = UploadFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded", body = MessageDto),
        (status = 400, description = "Missing, empty or oversized file", body = ErrorDto),
        (status = 403, description = "Not a channel member", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await?.to_vec();

        upload = Some(UploadFileParams {
            channel_id,
            user_id: user.id,
            file_name,
            content_type,
            bytes,
        });
        break;
    }

    let Some(upload) = upload else {
        return Err(AppError::BadRequest(format!(
            "Multipart field '{}' is missing",
            FILE_FIELD
        )));
    };

    let message = MessageService::new(&state.db, &state.storage)
        .upload(upload, state.max_upload_bytes)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Download the file behind a file message.
///
/// # Access Control
/// - `ChannelMember` - Channel members and global admins
#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/messages/{message_id}/file",
    tag = MESSAGE_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("message_id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "File contents with the original content type"),
        (status = 400, description = "Message has no file", body = ErrorDto),
        (status = 403, description = "Not a channel member", body = ErrorDto),
        (status = 404, description = "Message or file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_file(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, message_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let file = MessageService::new(&state.db, &state.storage)
        .download(channel_id, message_id)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&file.file_name),
            ),
        ],
        file.bytes,
    ))
}

/// Edit a text message. Only the author may edit.
#[utoipa::path(
    put,
    path = "/api/channels/{channel_id}/messages/{message_id}",
    tag = MESSAGE_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("message_id" = i32, Path, description = "Message ID")
    ),
    request_body = UpdateMessageDto,
    responses(
        (status = 200, description = "Message edited", body = MessageDto),
        (status = 400, description = "Invalid content or not a text message", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_message(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, message_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let message = MessageService::new(&state.db, &state.storage)
        .edit(channel_id, message_id, user.id, &payload.content)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// Delete a message as its author, a channel admin or a global admin.
#[utoipa::path(
    delete,
    path = "/api/channels/{channel_id}/messages/{message_id}",
    tag = MESSAGE_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("message_id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 403, description = "Not allowed to delete this message", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, message_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    MessageService::new(&state.db, &state.storage)
        .delete(channel_id, message_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Builds an attachment header value; characters that can't appear inside the
/// quoted file name are replaced.
fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();

    format!("attachment; filename=\"{}\"", safe)
}
