use super::*;
use chrono::{Duration, Utc};

/// Tests paging through a channel's messages.
///
/// Verifies newest-first ordering, the total count and that messages from other
/// channels are excluded.
///
/// Expected: Ok with the newest messages on page 0
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let (other_admin, other) = factory::helpers::create_channel_with_admin(db).await?;

    let now = Utc::now();
    for (offset, content) in [(3, "oldest"), (2, "middle"), (1, "newest")] {
        factory::message::MessageFactory::new(db, channel.id, admin.id)
            .content(content)
            .created_at(now - Duration::minutes(offset))
            .build()
            .await?;
    }
    factory::message::create_message(db, other.id, other_admin.id).await?;

    let repo = MessageRepository::new(db);
    let (messages, total) = repo.get_paginated_by_channel(channel.id, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        messages.iter().map(|m| m.content.as_str()).collect::<Vec<_>>(),
        vec!["newest", "middle"]
    );

    let (messages, _) = repo.get_paginated_by_channel(channel.id, 1, 2).await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "oldest");

    Ok(())
}
