//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

pub const DEFAULT_USERNAME: &str = "test_user";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"test_user"`
/// - email: `"test_user@example.com"`
/// - bio: `None`
/// - admin: `false`
/// - created_at: 2026-01-01 00:00:00 UTC
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

pub struct UserEntityBuilder {
    id: i32,
    username: String,
    bio: Option<String>,
    admin: bool,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            username: DEFAULT_USERNAME.to_string(),
            bio: None,
            admin: false,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            email: format!("{}@example.com", self.username),
            username: self.username,
            password_hash: crate::factory::user::DEFAULT_PASSWORD_HASH.to_string(),
            bio: self.bio,
            admin: self.admin,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}
