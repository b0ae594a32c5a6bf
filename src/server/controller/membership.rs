use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        channel::{MemberDto, SetRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::membership::MembershipService,
        state::AppState,
    },
};

/// Tag for grouping membership endpoints in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "membership";

/// Get the members of a channel with their roles.
///
/// # Access Control
/// - `ChannelMember` - Channel members and global admins
#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/members",
    tag = MEMBERSHIP_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<MemberDto>),
        (status = 403, description = "Not a channel member", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let members = MembershipService::new(&state.db).members(channel_id).await?;
    let dtos: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Join a public channel as a Member.
///
/// Private channels are joined through a join request instead.
///
/// # Returns
/// - `204 No Content` - Joined
/// - `400 Bad Request` - Channel is private
/// - `404 Not Found` - Channel not found
/// - `409 Conflict` - Already a member
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/join",
    tag = MEMBERSHIP_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    responses(
        (status = 204, description = "Joined the channel"),
        (status = 400, description = "Channel is private", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 409, description = "Already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_channel(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MembershipService::new(&state.db)
        .join(channel_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leave a channel.
///
/// The last Admin can't leave while other members remain; when the last member
/// leaves, the channel stays behind empty.
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/leave",
    tag = MEMBERSHIP_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    responses(
        (status = 204, description = "Left the channel"),
        (status = 400, description = "Last admin cannot leave", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_channel(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MembershipService::new(&state.db)
        .leave(channel_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change a member's role.
///
/// # Access Control
/// - `ChannelAdmin` - Channel admins and global admins
#[utoipa::path(
    put,
    path = "/api/channels/{channel_id}/members/{user_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    request_body = SetRoleDto,
    responses(
        (status = 204, description = "Role changed"),
        (status = 400, description = "Would demote the last admin", body = ErrorDto),
        (status = 403, description = "Not a channel admin", body = ErrorDto),
        (status = 404, description = "Channel or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_member_role(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelAdmin(channel_id)])
        .await?;

    MembershipService::new(&state.db)
        .set_role(channel_id, user_id, payload.role.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a member from a channel.
///
/// # Access Control
/// - `ChannelAdmin` - Channel admins and global admins
#[utoipa::path(
    delete,
    path = "/api/channels/{channel_id}/members/{user_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "Would remove the last admin", body = ErrorDto),
        (status = 403, description = "Not a channel admin", body = ErrorDto),
        (status = 404, description = "Channel or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelAdmin(channel_id)])
        .await?;

    MembershipService::new(&state.db)
        .remove_member(channel_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
