//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let channel = factory::channel::create_channel(&db).await?;
//!
//!     // Channel with an admin member already in place
//!     let (admin, channel) = factory::helpers::create_channel_with_admin(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod channel;
pub mod channel_user;
pub mod helpers;
pub mod message;
pub mod recommendation;
pub mod request;
pub mod user;

pub use category::create_category;
pub use channel::{create_channel, create_private_channel};
pub use channel_user::{create_admin_membership, create_membership};
pub use message::create_message;
pub use recommendation::create_recommendation;
pub use request::create_join_request;
pub use user::create_user;
