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
        join_request::JoinRequestDto,
        user::{ChangePasswordDto, CurrentUserDto, UpdateProfileDto, UserChannelDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{ChangePasswordParams, UpdateProfileParams},
        service::{
            auth::AuthService, join_request::JoinRequestService, membership::MembershipService,
            user::UserService,
        },
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user's public profile.
///
/// The email address is only ever returned for the logged-in user.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update your own username and bio.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid username or bio too long
/// - `409 Conflict` - Username taken by another user
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = CurrentUserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(UpdateProfileParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_current_dto())))
}

/// Change your own password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Not logged in, or current password is wrong
#[utoipa::path(
    put,
    path = "/api/user/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Not logged in or wrong current password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthService::new(&state.db)
        .change_password(ChangePasswordParams::from_dto(user.id, payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the channels you belong to, with your role in each.
#[utoipa::path(
    get,
    path = "/api/user/channels",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved channels", body = Vec<UserChannelDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_channels(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let channels = MembershipService::new(&state.db)
        .user_channels(user.id)
        .await?;
    let dtos: Vec<UserChannelDto> = channels.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get your join requests with their status.
#[utoipa::path(
    get,
    path = "/api/user/requests",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<JoinRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let requests = JoinRequestService::new(&state.db)
        .list_for_user(user.id)
        .await?;
    let dtos: Vec<JoinRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
