use super::*;

/// Tests collecting stored file names by channel and by author.
///
/// Expected: Ok with only file messages' stored names
#[tokio::test]
async fn collects_stored_file_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let member = factory::helpers::create_member(db, channel.id).await?;

    factory::message::create_message(db, channel.id, admin.id).await?;
    factory::message::MessageFactory::new(db, channel.id, admin.id)
        .content("cover.png")
        .file("a.bin", "image/png", 42)
        .build()
        .await?;
    factory::message::MessageFactory::new(db, channel.id, member.id)
        .content("notes.txt")
        .file("b.bin", "text/plain", 7)
        .build()
        .await?;

    let repo = MessageRepository::new(db);

    let mut channel_files = repo.file_paths_by_channel(channel.id).await?;
    channel_files.sort();
    assert_eq!(channel_files, vec!["a.bin".to_string(), "b.bin".to_string()]);

    let member_files = repo.file_paths_by_user(member.id).await?;
    assert_eq!(member_files, vec!["b.bin".to_string()]);

    Ok(())
}
