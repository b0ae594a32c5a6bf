//! Channel membership factory.

use chrono::Utc;
use entity::channel_user::ChannelRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row with the given role.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_id` - Channel the user joins
/// - `user_id` - Joining user
/// - `role` - Role inside the channel
pub async fn create_membership_with_role(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
    role: ChannelRole,
) -> Result<entity::channel_user::Model, DbErr> {
    entity::channel_user::ActiveModel {
        channel_id: ActiveValue::Set(channel_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Adds the user to the channel as a Member.
pub async fn create_membership(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
) -> Result<entity::channel_user::Model, DbErr> {
    create_membership_with_role(db, channel_id, user_id, ChannelRole::Member).await
}

/// Adds the user to the channel as an Admin.
pub async fn create_admin_membership(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
) -> Result<entity::channel_user::Model, DbErr> {
    create_membership_with_role(db, channel_id, user_id, ChannelRole::Admin).await
}
