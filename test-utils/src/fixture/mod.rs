//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! conversions between entity models, domain models and DTOs.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let admin = fixture::user::entity_builder().admin(true).build();
//! ```

pub mod channel;
pub mod user;

pub use channel::entity as channel_entity;
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
