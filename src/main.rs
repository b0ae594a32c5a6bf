mod model;
mod server;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, service::admin::code::AdminCodeService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let storage = startup::setup_storage(&config).await?;

    let admin_code_service = AdminCodeService::new();

    // Check for admin users and log a claim code if none exist
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let state = AppState::new(db, admin_code_service, storage, config.max_upload_bytes);

    let mut app = router::router(config.max_upload_bytes)?
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_origin {
        app = app.layer(router::cors_layer(origin)?);
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
