use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to prepare the session store.
    #[error("Failed to set up session store: {0}")]
    Session(String),
}
