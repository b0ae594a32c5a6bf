use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::request::RequestStatus;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        join_request::{CreateJoinRequestDto, JoinRequestDto, RequestStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::join_request::{CreateJoinRequestParams, RequestDecision},
        service::join_request::JoinRequestService,
        state::AppState,
    },
};

/// Tag for grouping join request endpoints in OpenAPI documentation
pub static JOIN_REQUEST_TAG: &str = "join_request";

#[derive(Deserialize)]
pub struct RequestStatusQuery {
    pub status: Option<RequestStatusDto>,
}

/// Ask to join a private channel.
///
/// # Access Control
/// - Any logged-in user who is not yet a member
///
/// # Returns
/// - `201 Created` - The pending request
/// - `400 Bad Request` - Channel is public or the note is too long
/// - `404 Not Found` - Channel not found
/// - `409 Conflict` - Already a member, or a request is already pending
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/requests",
    tag = JOIN_REQUEST_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    request_body = CreateJoinRequestDto,
    responses(
        (status = 201, description = "Join request created", body = JoinRequestDto),
        (status = 400, description = "Channel is public or invalid note", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 409, description = "Already a member or request pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_join_request(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Json(payload): Json<CreateJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let request = JoinRequestService::new(&state.db)
        .create(CreateJoinRequestParams::from_dto(channel_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Get a channel's join requests, oldest first.
///
/// Only pending requests are listed unless another status is asked for.
///
/// # Access Control
/// - `ChannelAdmin` - Channel admins and global admins
#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/requests",
    tag = JOIN_REQUEST_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("status" = Option<RequestStatusDto>, Query, description = "Request status (default: pending)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<JoinRequestDto>),
        (status = 403, description = "Not a channel admin", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channel_requests(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Query(query): Query<RequestStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelAdmin(channel_id)])
        .await?;

    let status = query
        .status
        .map(RequestStatus::from)
        .unwrap_or(RequestStatus::Pending);

    let requests = JoinRequestService::new(&state.db)
        .list_for_channel(channel_id, status)
        .await?;
    let dtos: Vec<JoinRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Approve a pending request; the requester becomes a Member.
///
/// # Access Control
/// - `ChannelAdmin` - Channel admins and global admins
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/requests/{request_id}/approve",
    tag = JOIN_REQUEST_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("request_id" = i32, Path, description = "Join request ID")
    ),
    responses(
        (status = 200, description = "Request approved", body = JoinRequestDto),
        (status = 400, description = "Request already resolved", body = ErrorDto),
        (status = 403, description = "Not a channel admin", body = ErrorDto),
        (status = 404, description = "Request not found in this channel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_request(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, request_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    resolve(state, session, channel_id, request_id, RequestDecision::Approve).await
}

/// Reject a pending request.
///
/// # Access Control
/// - `ChannelAdmin` - Channel admins and global admins
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/requests/{request_id}/reject",
    tag = JOIN_REQUEST_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("request_id" = i32, Path, description = "Join request ID")
    ),
    responses(
        (status = 200, description = "Request rejected", body = JoinRequestDto),
        (status = 400, description = "Request already resolved", body = ErrorDto),
        (status = 403, description = "Not a channel admin", body = ErrorDto),
        (status = 404, description = "Request not found in this channel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_request(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, request_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    resolve(state, session, channel_id, request_id, RequestDecision::Reject).await
}

async fn resolve(
    state: AppState,
    session: Session,
    channel_id: i32,
    request_id: i32,
    decision: RequestDecision,
) -> Result<(StatusCode, Json<JoinRequestDto>), AppError> {
    let resolver = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelAdmin(channel_id)])
        .await?;

    let request = JoinRequestService::new(&state.db)
        .resolve(channel_id, request_id, decision, resolver.id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Cancel your own pending request.
#[utoipa::path(
    delete,
    path = "/api/requests/{request_id}",
    tag = JOIN_REQUEST_TAG,
    params(
        ("request_id" = i32, Path, description = "Join request ID")
    ),
    responses(
        (status = 204, description = "Request cancelled"),
        (status = 400, description = "Request is no longer pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Request belongs to another user", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    JoinRequestService::new(&state.db)
        .cancel(request_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
