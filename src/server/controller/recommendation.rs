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
        recommendation::{
            CreateRecommendationDto, PaginatedRecommendationsDto, RecommendationDto,
            RecommendationSourceDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::recommendation::CreateRecommendationParams,
        service::recommendation::RecommendationService,
        state::AppState,
    },
};

/// Tag for grouping recommendation endpoints in OpenAPI documentation
pub static RECOMMENDATION_TAG: &str = "recommendation";

#[derive(Deserialize)]
pub struct RecommendationListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub source: Option<RecommendationSourceDto>,
}

/// Get paginated recommendations of a channel, newest first.
///
/// # Access Control
/// - `ChannelMember` - Channel members and global admins
#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/recommendations",
    tag = RECOMMENDATION_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("source" = Option<RecommendationSourceDto>, Query, description = "Only this source")
    ),
    responses(
        (status = 200, description = "Successfully retrieved recommendations", body = PaginatedRecommendationsDto),
        (status = 403, description = "Not a channel member", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Query(query): Query<RecommendationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let recommendations = RecommendationService::new(&state.db)
        .list(
            channel_id,
            query.source.map(Into::into),
            query.page,
            query.entries,
        )
        .await?;

    Ok((StatusCode::OK, Json(recommendations.into_dto())))
}

/// Recommend a Spotify track or a TMDb title in a channel.
///
/// Only the external ID and display title are stored; nothing is fetched from
/// Spotify or TMDb.
///
/// # Access Control
/// - `ChannelMember` - Channel members and global admins
///
/// # Returns
/// - `201 Created` - The new recommendation
/// - `400 Bad Request` - Invalid external ID, title or comment
/// - `409 Conflict` - Item already recommended in this channel
#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/recommendations",
    tag = RECOMMENDATION_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID")
    ),
    request_body = CreateRecommendationDto,
    responses(
        (status = 201, description = "Recommendation created", body = RecommendationDto),
        (status = 400, description = "Invalid recommendation data", body = ErrorDto),
        (status = 403, description = "Not a channel member", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 409, description = "Already recommended in this channel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recommendation(
    State(state): State<AppState>,
    session: Session,
    Path(channel_id): Path<i32>,
    Json(payload): Json<CreateRecommendationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    let recommendation = RecommendationService::new(&state.db)
        .create(CreateRecommendationParams::from_dto(
            channel_id, user.id, payload,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(recommendation.into_dto())))
}

/// Delete a recommendation as its author, a channel admin or a global admin.
#[utoipa::path(
    delete,
    path = "/api/channels/{channel_id}/recommendations/{recommendation_id}",
    tag = RECOMMENDATION_TAG,
    params(
        ("channel_id" = i32, Path, description = "Channel ID"),
        ("recommendation_id" = i32, Path, description = "Recommendation ID")
    ),
    responses(
        (status = 204, description = "Recommendation deleted"),
        (status = 403, description = "Not allowed to delete this recommendation", body = ErrorDto),
        (status = 404, description = "Recommendation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recommendation(
    State(state): State<AppState>,
    session: Session,
    Path((channel_id, recommendation_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChannelMember(channel_id)])
        .await?;

    RecommendationService::new(&state.db)
        .delete(channel_id, recommendation_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
