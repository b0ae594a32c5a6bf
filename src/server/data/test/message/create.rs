use super::*;
use entity::message::MessageKind;

/// Tests posting a text message.
///
/// Expected: Ok with the author's username and no file metadata
#[tokio::test]
async fn creates_text_message_with_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParams::text(
            channel.id,
            admin.id,
            "first!".to_string(),
        ))
        .await?;

    assert_eq!(message.kind, MessageKind::Text);
    assert_eq!(message.content, "first!");
    assert_eq!(message.username, admin.username);
    assert!(message.file_path.is_none());
    assert!(message.edited_at.is_none());

    Ok(())
}
