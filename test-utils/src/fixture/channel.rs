//! Channel fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::channel;

pub const DEFAULT_NAME: &str = "Test Channel";

/// Creates a public channel entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Channel"`
/// - description: `None`
/// - is_private: `false`
pub fn entity() -> channel::Model {
    channel::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: None,
        is_private: false,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
