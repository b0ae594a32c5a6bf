//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::{service::admin::code::AdminCodeService, util::storage::FileStorage};

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: `DatabaseConnection` is a pool handle and
/// `AdminCodeService` shares its code behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Holds the one-time code used to claim the first admin account.
    pub admin_code_service: AdminCodeService,

    /// Storage for the files of file messages.
    pub storage: FileStorage,

    /// Largest accepted upload in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admin_code_service` - Service for managing admin codes
    /// - `storage` - Upload storage
    /// - `max_upload_bytes` - Upload size limit
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        storage: FileStorage,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            storage,
            max_upload_bytes,
        }
    }
}
