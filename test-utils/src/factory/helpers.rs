//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a channel together with a user holding the channel Admin role.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, channel))` - The channel admin and the channel
/// - `Err(DbErr)` - Database error during creation
pub async fn create_channel_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::channel::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let channel = crate::factory::channel::create_channel(db).await?;
    crate::factory::channel_user::create_admin_membership(db, channel.id, user.id).await?;

    Ok((user, channel))
}

/// Creates a new user and adds them to the channel as a Member.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_id` - Channel to join
///
/// # Returns
/// - `Ok(user)` - The newly created member
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member(
    db: &DatabaseConnection,
    channel_id: i32,
) -> Result<entity::user::Model, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    crate::factory::channel_user::create_membership(db, channel_id, user.id).await?;

    Ok(user)
}
