use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        auth::ClaimAdminDto,
        user::{CurrentUserDto, PaginatedUsersDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Claim admin rights with the startup code.
///
/// When the server starts without any admin it logs a one-time code. The first
/// logged-in user to submit it becomes an admin and the code is consumed.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database and the admin code service
/// - `session` - User's session for authentication
/// - `payload` - The code printed in the server log
///
/// # Returns
/// - `200 OK` - The user, now an admin
/// - `400 Bad Request` - Wrong, expired or already used code
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/admin/claim",
    tag = ADMIN_TAG,
    request_body = ClaimAdminDto,
    responses(
        (status = 200, description = "Admin rights granted", body = CurrentUserDto),
        (status = 400, description = "Invalid or expired code", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_admin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ClaimAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = AdminService::new(&state.db)
        .claim(&state.admin_code_service, user.id, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(user.into_current_dto())))
}

/// Get paginated users ordered by username.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = AdminService::new(&state.db)
        .list_users(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Grant the global admin flag to a user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/admin",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Admin flag granted", body = UserDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn grant_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = AdminService::new(&state.db).grant_admin(user_id).await?;

    tracing::info!("Admin {} granted admin to user {}", actor.id, user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Revoke the global admin flag from a user.
///
/// Refused when it would leave the application without any admin.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}/admin",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Admin flag revoked", body = UserDto),
        (status = 400, description = "User is the last admin", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = AdminService::new(&state.db).revoke_admin(user_id).await?;

    tracing::info!("Admin {} revoked admin from user {}", actor.id, user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account.
///
/// Everything the user owns is removed with it, including the stored files of
/// their file messages.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - Admin tried to delete their own account
/// - `404 Not Found` - No such user
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Cannot delete yourself", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AdminService::new(&state.db)
        .delete_user(actor.id, user_id, &state.storage)
        .await?;

    tracing::info!("Admin {} deleted user {}", actor.id, user_id);

    Ok(StatusCode::NO_CONTENT)
}
