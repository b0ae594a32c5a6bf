use super::*;
use crate::server::{
    model::message::UploadFileParams, service::message::MessageService,
    util::storage::FileStorage,
};
use entity::message::MessageKind;

/// Tests text message validation.
///
/// Expected: trimmed content stored, BadRequest for blank or oversized text
#[tokio::test]
async fn posts_trimmed_text() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path());

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;

    let service = MessageService::new(db, &storage);

    let message = service.post_text(channel.id, admin.id, "  hi  ").await?;
    assert_eq!(message.content, "hi");

    assert!(matches!(
        service.post_text(channel.id, admin.id, "   ").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .post_text(channel.id, admin.id, &"a".repeat(2001))
            .await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests the upload and download round trip of a file message.
///
/// Expected: file stored, downloadable with its name and type, size limit enforced
#[tokio::test]
async fn uploads_and_downloads_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path());

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;

    let service = MessageService::new(db, &storage);

    let upload = |bytes: Vec<u8>| UploadFileParams {
        channel_id: channel.id,
        user_id: admin.id,
        file_name: "setlist.txt".to_string(),
        content_type: "text/plain".to_string(),
        bytes,
    };

    let message = service.upload(upload(b"1. Intro".to_vec()), 16).await?;
    assert_eq!(message.kind, MessageKind::File);
    assert_eq!(message.content, "setlist.txt");
    assert_eq!(message.file_size, Some(8));

    let download = service.download(channel.id, message.id).await?;
    assert_eq!(download.file_name, "setlist.txt");
    assert_eq!(download.content_type, "text/plain");
    assert_eq!(download.bytes, b"1. Intro");

    assert!(matches!(
        service.upload(upload(vec![0; 17]), 16).await,
        Err(AppError::BadRequest(_))
    ));

    let text = service.post_text(channel.id, admin.id, "no file").await?;
    assert!(matches!(
        service.download(channel.id, text.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests who may edit and delete a message.
///
/// Verifies that only the author edits, while the author or a channel admin may
/// delete, and that a message addressed through another channel is NotFound.
///
/// Expected: AccessDenied for others, Ok for the allowed users
#[tokio::test]
async fn edit_and_delete_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path());

    let (admin_entity, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let author_entity = factory::helpers::create_member(db, channel.id).await?;
    let other_entity = factory::helpers::create_member(db, channel.id).await?;
    let other_channel = factory::channel::create_channel(db).await?;

    let users = crate::server::data::user::UserRepository::new(db);
    let admin = users.find_by_id(admin_entity.id).await?.unwrap();
    let other = users.find_by_id(other_entity.id).await?.unwrap();

    let service = MessageService::new(db, &storage);
    let message = service
        .post_text(channel.id, author_entity.id, "origin")
        .await?;

    assert!(matches!(
        service
            .edit(channel.id, message.id, other.id, "hijack")
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service
            .edit(other_channel.id, message.id, author_entity.id, "moved")
            .await,
        Err(AppError::NotFound(_))
    ));

    let edited = service
        .edit(channel.id, message.id, author_entity.id, "edited")
        .await?;
    assert_eq!(edited.content, "edited");
    assert!(edited.edited_at.is_some());

    assert!(matches!(
        service.delete(channel.id, message.id, &other).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    service.delete(channel.id, message.id, &admin).await?;

    assert!(matches!(
        service.download(channel.id, message.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
