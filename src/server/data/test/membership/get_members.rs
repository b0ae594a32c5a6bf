use super::*;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests listing channel members.
///
/// Verifies that members come back with usernames and roles, ordered by the
/// time they joined.
///
/// Expected: Ok with oldest member first
#[tokio::test]
async fn returns_members_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::channel::create_channel(db).await?;
    let late = factory::user::UserFactory::new(db)
        .username("late")
        .build()
        .await?;
    let early = factory::user::UserFactory::new(db)
        .username("early")
        .build()
        .await?;

    entity::channel_user::ActiveModel {
        channel_id: ActiveValue::Set(channel.id),
        user_id: ActiveValue::Set(late.id),
        role: ActiveValue::Set(ChannelRole::Member),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await?;
    entity::channel_user::ActiveModel {
        channel_id: ActiveValue::Set(channel.id),
        user_id: ActiveValue::Set(early.id),
        role: ActiveValue::Set(ChannelRole::Admin),
        joined_at: ActiveValue::Set(Utc::now() - Duration::days(1)),
    }
    .insert(db)
    .await?;

    let repo = MembershipRepository::new(db);
    let members = repo.get_members(channel.id).await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].username, "early");
    assert_eq!(members[0].role, ChannelRole::Admin);
    assert_eq!(members[1].username, "late");
    assert_eq!(members[1].role, ChannelRole::Member);

    Ok(())
}
