//! Join request factory.

use chrono::Utc;
use entity::request::RequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a join request with the given status plus its channel/user binding.
///
/// # Returns
/// - `Ok((request, binding))` - The request row and its binding row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_join_request_with_status(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
    status: RequestStatus,
) -> Result<
    (
        entity::request::Model,
        entity::bind_request_channel_user::Model,
    ),
    DbErr,
> {
    let request = entity::request::ActiveModel {
        status: ActiveValue::Set(status),
        message: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        resolved_at: ActiveValue::Set(None),
        resolved_by: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let binding = entity::bind_request_channel_user::ActiveModel {
        request_id: ActiveValue::Set(request.id),
        channel_id: ActiveValue::Set(channel_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await?;

    Ok((request, binding))
}

/// Inserts a pending join request.
pub async fn create_join_request(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
) -> Result<
    (
        entity::request::Model,
        entity::bind_request_channel_user::Model,
    ),
    DbErr,
> {
    create_join_request_with_status(db, channel_id, user_id, RequestStatus::Pending).await
}
