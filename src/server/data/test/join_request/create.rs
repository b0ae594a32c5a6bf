use super::*;

/// Tests creating a join request.
///
/// Verifies that the request is pending and carries the channel and requester
/// names loaded from the binding row.
///
/// Expected: Ok with a pending request
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::channel::ChannelFactory::new(db)
        .name("Vinyl Club")
        .private(true)
        .build()
        .await?;
    let user = factory::user::UserFactory::new(db)
        .username("digger")
        .build()
        .await?;

    let repo = JoinRequestRepository::new(db);
    let request = repo
        .create(CreateJoinRequestParams {
            channel_id: channel.id,
            user_id: user.id,
            message: Some("I have a record player".to_string()),
        })
        .await?;

    assert!(request.is_pending());
    assert_eq!(request.channel_name, "Vinyl Club");
    assert_eq!(request.username, "digger");
    assert_eq!(request.message.as_deref(), Some("I have a record player"));
    assert!(request.resolved_at.is_none());
    assert!(request.resolved_by.is_none());

    Ok(())
}
