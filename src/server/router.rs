//! Route table and OpenAPI documentation.
//!
//! Routes are registered through `utoipa-axum` so the OpenAPI document is collected
//! from the handlers' `#[utoipa::path]` attributes. The document is served by Swagger
//! UI at `/api/docs`.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, auth, category, channel, join_request, membership, message, recommendation,
        top_list, user,
    },
    error::{config::ConfigError, internal::InternalError, AppError},
    state::AppState,
};

/// Requests per second replenished for each client IP on the auth routes.
const AUTH_RATE_PER_SECOND: u64 = 2;
/// Requests a client IP may burst on the auth routes.
const AUTH_RATE_BURST: u32 = 10;

/// Extra body allowance on top of the upload limit for multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "recroom",
        description = "Channels for sharing music and film recommendations"
    ),
    tags(
        (name = "auth", description = "Registration, login and sessions"),
        (name = "admin", description = "Global administration"),
        (name = "user", description = "Profiles and the logged-in user's data"),
        (name = "category", description = "Channel categories"),
        (name = "channel", description = "Channels"),
        (name = "membership", description = "Channel members and roles"),
        (name = "join_request", description = "Requests to join private channels"),
        (name = "message", description = "Channel messages and files"),
        (name = "recommendation", description = "Spotify and TMDb recommendations"),
        (name = "top_list", description = "Per-user Top 5 lists")
    )
)]
struct ApiDoc;

/// Builds the API router with its documentation.
///
/// # Arguments
/// - `max_upload_bytes` - Largest accepted file upload
///
/// # Returns
/// - `Ok(Router)` - Router still waiting for its `AppState`
/// - `Err(InternalError::RateLimitConfig)` - Rate limiter rejected its settings
pub fn router(max_upload_bytes: usize) -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(AUTH_RATE_PER_SECOND)
        .burst_size(AUTH_RATE_BURST)
        .finish()
        .ok_or(InternalError::RateLimitConfig)?;

    let auth_routes = OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    let upload_routes = OpenApiRouter::new()
        .routes(routes!(message::upload_file))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth_routes)
        .merge(upload_routes)
        // admin
        .routes(routes!(admin::claim_admin))
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::grant_admin, admin::revoke_admin))
        .routes(routes!(admin::delete_user))
        .routes(routes!(category::create_category))
        .routes(routes!(category::update_category, category::delete_category))
        // users
        .routes(routes!(user::get_profile))
        .routes(routes!(user::update_profile))
        .routes(routes!(user::change_password))
        .routes(routes!(user::get_my_channels))
        .routes(routes!(user::get_my_requests))
        .routes(routes!(top_list::get_top_songs))
        .routes(routes!(top_list::get_top_tmdb))
        .routes(routes!(top_list::replace_top_songs))
        .routes(routes!(top_list::replace_top_tmdb))
        .routes(routes!(top_list::remove_top_song))
        .routes(routes!(top_list::remove_top_tmdb))
        // categories and channels
        .routes(routes!(category::get_categories))
        .routes(routes!(category::get_category))
        .routes(routes!(channel::get_channels, channel::create_channel))
        .routes(routes!(
            channel::get_channel,
            channel::update_channel,
            channel::delete_channel
        ))
        .routes(routes!(membership::get_members))
        .routes(routes!(membership::join_channel))
        .routes(routes!(membership::leave_channel))
        .routes(routes!(
            membership::set_member_role,
            membership::remove_member
        ))
        .routes(routes!(
            join_request::create_join_request,
            join_request::get_channel_requests
        ))
        .routes(routes!(join_request::approve_request))
        .routes(routes!(join_request::reject_request))
        .routes(routes!(join_request::cancel_request))
        .routes(routes!(message::get_messages, message::post_message))
        .routes(routes!(message::edit_message, message::delete_message))
        .routes(routes!(message::download_file))
        .routes(routes!(
            recommendation::get_recommendations,
            recommendation::create_recommendation
        ))
        .routes(routes!(recommendation::delete_recommendation))
        .split_for_parts();

    Ok(router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api)))
}

/// Builds a CORS layer allowing credentialed requests from a single origin.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer for the configured origin
/// - `Err(ConfigError::InvalidEnvVar)` - Origin is not a valid header value
pub fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use super::*;
    use crate::server::{service::admin::code::AdminCodeService, util::storage::FileStorage};

    async fn app(test: &test_utils::context::TestContext) -> Router {
        let db = test.db.clone().unwrap();
        let state = AppState::new(
            db,
            AdminCodeService::new(),
            FileStorage::new(std::env::temp_dir().join("recroom-router-test")),
            1024,
        );

        router(1024)
            .unwrap()
            .with_state(state)
            .layer(SessionManagerLayer::new(MemoryStore::default()))
    }

    /// Tests that protected routes reject anonymous requests.
    ///
    /// Expected: 401 for the category listing without a session
    #[tokio::test]
    async fn anonymous_requests_are_unauthorized() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = app(&test).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests that the OpenAPI document is served.
    ///
    /// Expected: 200 with a JSON document listing the channel routes
    #[tokio::test]
    async fn serves_openapi_document() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = app(&test).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(doc["paths"]["/api/channels/{channel_id}"].is_object());
        assert!(doc["paths"]["/api/auth/register"].is_object());
    }

    #[test]
    fn rejects_invalid_cors_origin() {
        assert!(cors_layer("http://localhost:3000").is_ok());
        assert!(matches!(
            cors_layer("bad\norigin"),
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
