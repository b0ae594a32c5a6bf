use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{default_entries, ErrorDto},
        channel::{ChannelDto, CreateChannelDto, PaginatedChannelsDto, UpdateChannelDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::channel::{CreateChannelParams, GetChannelsParams, UpdateChannelParams},
        service::channel::ChannelService,
        state::AppState,
    },
};

/// Tag for grouping channel endpoints in OpenAPI documentation
pub static CHANNEL_TAG: &str = "channel";

/// Query parameters for the channel listing.
#[derive(Deserialize)]
pub struct ChannelListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub category_id: Option<i32>,
    pub search: Option<String>,
}

/// Get paginated channels.
///
/// Channels are ordered by name. The listing can be narrowed to a single category
/// and to names containing a search term (case-insensitive). Private channels are
/// listed as well so users can find them and ask to join.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `query` - Page selection plus optional category and search filters
///
/// # Returns
/// - `200 OK` - Page of channels with their categories and member counts
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/channels",
    tag = CHANNEL_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category_id" = Option<i32>, Query, description = "Only channels in this category"),
        ("search" = Option<String>, Query, description = "Case-insensitive name search")
    ),
    responses(
        (status = 200, description = "Successfully retrieved channels", body = PaginatedChannelsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channels(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ChannelListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let search = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let channels = ChannelService::new(&state.db)
        .list(GetChannelsParams {
            page: query.page,
            per_page: query.entries,
            category_id: query.category_id,
            search,
        })
        .await?;

    Ok((StatusCode::OK, Json(channels.into_dto())))
}

/// Get a channel by ID.
#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}",
    tag = CHANNEL_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved channel", body = ChannelDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channel(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let channel = ChannelService::new(&state.db).get(channel_id).await?;

    Ok((StatusCode::OK, Json(channel.into_dto())))
}

/// Create a channel.
///
/// The creator becomes the channel's first Admin. Duplicate category IDs are
/// collapsed before the five-category limit is checked.
///
/// # Returns
/// - `201 Created` - The new channel
/// - `400 Bad Request` - Invalid name or description, too many or unknown categories
/// - `409 Conflict` - Channel name already taken
#[utoipa::path(
    post,
    path = "/api/channels",
    tag = CHANNEL_TAG,
    request_body = CreateChannelDto,
    responses(
        (status = 201, description = "Successfully created channel", body = ChannelDto),
        (status = 400, description = "Invalid channel data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Channel name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_channel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let channel = ChannelService::new(&state.db)
        .create(CreateChannelParams::from_dto(user.id, payload))
        .await?;

    tracing::info!("User {} created channel {}", user.id, channel.id);

    Ok((StatusCode::CREATED, Json(channel.into_dto())))
}

/// Update a channel. Its categories are replaced as a set.
///
/// # Access Control
/// - `ChannelAdmin` - Channel admins and global admins
#[utoipa::path(
    put,
    path = "/api/channels/{channel_id}",
    tag = CHANNEL_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    request_body = UpdateChannelDto,
    responses(
        (status = 200, description = "Successfully updated channel", body = ChannelDto),
        (status = 400, description = "Invalid channel data", body = ErrorDto),
        (status = 403, description = "Not a channel admin", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 409, description = "Channel name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_channel(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Json(payload): Json<UpdateChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelAdmin(channel_id)])
        .await?;

    let channel = ChannelService::new(&state.db)
        .update(UpdateChannelParams::from_dto(channel_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(channel.into_dto())))
}

/// Delete a channel with its members, messages, recommendations and requests.
///
/// # Access Control
/// - `ChannelAdmin` - Channel admins and global admins
#[utoipa::path(
    delete,
    path = "/api/channels/{channel_id}",
    tag = CHANNEL_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted channel"),
        (status = 403, description = "Not a channel admin", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_channel(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelAdmin(channel_id)])
        .await?;

    ChannelService::new(&state.db)
        .delete(channel_id, &state.storage)
        .await?;

    tracing::info!("User {} deleted channel {}", user.id, channel_id);

    Ok(StatusCode::NO_CONTENT)
}
