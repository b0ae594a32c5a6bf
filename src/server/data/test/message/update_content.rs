use super::*;

/// Tests editing a message.
///
/// Expected: Ok(Some) with new content and `edited_at` set
#[tokio::test]
async fn updates_content_and_marks_edited() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let message = factory::message::create_message(db, channel.id, admin.id).await?;

    let repo = MessageRepository::new(db);
    let updated = repo
        .update_content(message.id, "fixed typo".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.content, "fixed typo");
    assert!(updated.edited_at.is_some());

    Ok(())
}

/// Tests editing a message that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let result = repo.update_content(12, "nothing".to_string()).await?;

    assert!(result.is_none());

    Ok(())
}
