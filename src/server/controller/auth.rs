use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto},
        user::CurrentUserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a non-admin user and logs the new session in.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session the new user is logged into
/// - `payload` - Username, email and password
///
/// # Returns
/// - `201 Created` - The new user, now logged in
/// - `400 Bad Request` - Username, email or password fails validation
/// - `409 Conflict` - Username or email already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = CurrentUserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(RegisterParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    tracing::info!("Registered user {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user.into_current_dto())))
}

/// Log in with a username or email and a password.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Unknown user or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = CurrentUserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(payload.login.trim(), &payload.password)
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_current_dto())))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The logged-in user including their email
/// - `401 Unauthorized` - Nobody is logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = CurrentUserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_current_dto())))
}
