use super::*;

/// Tests detecting a pending request for a channel and user.
///
/// Expected: Ok(true) only when a pending request exists
#[tokio::test]
async fn detects_only_pending_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::channel::create_private_channel(db).await?;
    let pending_user = factory::user::create_user(db).await?;
    let rejected_user = factory::user::create_user(db).await?;

    factory::request::create_join_request(db, channel.id, pending_user.id).await?;
    factory::request::create_join_request_with_status(
        db,
        channel.id,
        rejected_user.id,
        RequestStatus::Rejected,
    )
    .await?;

    let repo = JoinRequestRepository::new(db);

    assert!(repo.has_pending(channel.id, pending_user.id).await?);
    assert!(!repo.has_pending(channel.id, rejected_user.id).await?);

    Ok(())
}
