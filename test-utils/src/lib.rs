//! Test scaffolding for the recroom server.
//!
//! Each test builds its own in-memory SQLite database with only the tables it
//! touches, then seeds rows through `factory`:
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_all_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let (owner, channel) = factory::helpers::create_channel_with_admin(db).await?;
//! let member = factory::user::create_user(db).await?;
//! ```
//!
//! `fixture` holds entity models built in memory for tests that never hit the
//! database. `TestContext::db_and_session` also hands out a tower-sessions
//! `Session` stored in the same database for permission-guard tests.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
