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
        top_list::{ReplaceTopSongsDto, ReplaceTopTmdbDto, TopSongDto, TopTmdbDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::top_list::{TopSong, TopTmdb},
        service::top_list::TopListService,
        state::AppState,
    },
};

/// Tag for grouping top list endpoints in OpenAPI documentation
pub static TOP_LIST_TAG: &str = "top_list";

/// Get a user's top songs ordered by position.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/top/songs",
    tag = TOP_LIST_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved top songs", body = Vec<TopSongDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_songs(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let songs = TopListService::new(&state.db).get_songs(user_id).await?;
    let dtos: Vec<TopSongDto> = songs.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a user's top movies and shows ordered by position.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/top/tmdb",
    tag = TOP_LIST_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved top titles", body = Vec<TopTmdbDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_tmdb(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let titles = TopListService::new(&state.db).get_tmdb(user_id).await?;
    let dtos: Vec<TopTmdbDto> = titles.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Replace your own top songs.
///
/// The list holds at most five entries with unique positions between 1 and 5 and
/// no repeated Spotify ID. The previous list is replaced in a single transaction.
///
/// # Returns
/// - `200 OK` - The stored list ordered by position
/// - `400 Bad Request` - The list breaks one of the rules above
#[utoipa::path(
    put,
    path = "/api/user/top/songs",
    tag = TOP_LIST_TAG,
    request_body = ReplaceTopSongsDto,
    responses(
        (status = 200, description = "Top songs replaced", body = Vec<TopSongDto>),
        (status = 400, description = "Invalid top list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_top_songs(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReplaceTopSongsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let entries = payload.entries.into_iter().map(TopSong::from_dto).collect();
    let songs = TopListService::new(&state.db)
        .replace_songs(user.id, entries)
        .await?;
    let dtos: Vec<TopSongDto> = songs.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Replace your own top movies and shows.
///
/// Same rules as the song list; a TMDb ID may appear once per media type.
#[utoipa::path(
    put,
    path = "/api/user/top/tmdb",
    tag = TOP_LIST_TAG,
    request_body = ReplaceTopTmdbDto,
    responses(
        (status = 200, description = "Top titles replaced", body = Vec<TopTmdbDto>),
        (status = 400, description = "Invalid top list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_top_tmdb(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReplaceTopTmdbDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let entries = payload.entries.into_iter().map(TopTmdb::from_dto).collect();
    let titles = TopListService::new(&state.db)
        .replace_tmdb(user.id, entries)
        .await?;
    let dtos: Vec<TopTmdbDto> = titles.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    delete,
    path = "/api/user/top/songs/{position}",
    tag = TOP_LIST_TAG,
    params(
        ("position" = i32, Path, description = "Position 1 to 5")
    ),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No entry at this position", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_top_song(
    State(state): State<AppState>,
    session: Session,
    Path(position): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TopListService::new(&state.db)
        .remove_song(user.id, position)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/user/top/tmdb/{position}",
    tag = TOP_LIST_TAG,
    params(
        ("position" = i32, Path, description = "Position 1 to 5")
    ),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No entry at this position", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_top_tmdb(
    State(state): State<AppState>,
    session: Session,
    Path(position): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TopListService::new(&state.db)
        .remove_tmdb(user.id, position)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
