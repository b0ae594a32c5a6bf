use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{internal::InternalError, AppError},
    service::admin::code::AdminCodeService,
    util::storage::FileStorage,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite database.
///
/// Sessions share the SeaORM connection pool and expire after seven days without
/// a request.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to install on the router
/// - `Err(InternalError::SessionStore)` - Session table could not be created
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| InternalError::SessionStore(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// Creates the upload directory if needed and returns the storage around it.
pub async fn setup_storage(config: &Config) -> Result<FileStorage, AppError> {
    let storage = FileStorage::new(&config.upload_dir);
    storage.ensure_dir().await?;

    tracing::info!("Storing uploads in {}", storage.dir().display());

    Ok(storage)
}

/// Generates an admin claim code when no admin exists yet.
///
/// The code is only printed to the log together with the claim endpoint, so
/// whoever runs the server can hand out the first admin account.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Configuration providing the public application URL
/// - `admin_code_service` - Service holding the generated code
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.issue().await;

    tracing::info!(
        "No admin account exists. Log in and POST {{\"code\": \"{}\"}} to {}/api/admin/claim within 10 minutes to become admin",
        code,
        config.app_url
    );

    Ok(())
}
