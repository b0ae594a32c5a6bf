use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Channel};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Channel)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for channel operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Category
    /// - Channel
    /// - BindChannelCategory
    /// - ChannelUser
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_channel_tables(self) -> Self {
        self.with_table(User)
            .with_table(Category)
            .with_table(Channel)
            .with_table(BindChannelCategory)
            .with_table(ChannelUser)
    }

    /// Adds the channel tables plus the join request tables.
    ///
    /// Equivalent to `with_channel_tables()` followed by `Request` and
    /// `BindRequestChannelUser`.
    pub fn with_request_tables(self) -> Self {
        self.with_channel_tables()
            .with_table(Request)
            .with_table(BindRequestChannelUser)
    }

    /// Adds every table in the schema.
    ///
    /// Use this for service-level tests that touch several domains at once, such
    /// as deleting a channel or a user.
    pub fn with_all_tables(self) -> Self {
        self.with_request_tables()
            .with_table(Message)
            .with_table(Recommendation)
            .with_table(TopSong)
            .with_table(TopTmdb)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
