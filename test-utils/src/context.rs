use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Inactivity window used for test sessions; matches the server's seven days.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// A throwaway in-memory SQLite database plus an optional session stored in it.
///
/// Both are opened on first use. The database lives as long as the context, so keep
/// the context alive for the whole test.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the in-memory database, connecting on the first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect("sqlite::memory:").await?,
        };

        Ok(self.db.insert(db))
    }

    /// Runs the given CREATE TABLE statements in order. Used by `TestBuilder::build`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }

    /// Returns a session backed by a `SqliteStore` in the test database.
    ///
    /// The session table is migrated the first time this is called.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        let session = match self.session.take() {
            Some(session) => session,
            None => {
                let pool = self.database().await?.get_sqlite_connection_pool().clone();
                let store = SqliteStore::new(pool);
                store
                    .migrate()
                    .await
                    .map_err(|e| TestError::Session(e.to_string()))?;

                Session::new(
                    None,
                    Arc::new(store),
                    Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
                )
            }
        };

        Ok(self.session.insert(session))
    }

    /// Borrows the database and the session together, creating either if needed.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session(
                "test context was not initialized".to_string(),
            )),
        }
    }
}
