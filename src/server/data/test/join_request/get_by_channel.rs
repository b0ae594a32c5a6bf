use super::*;

/// Tests listing a channel's requests filtered by status.
///
/// Expected: Ok with only matching requests for that channel, oldest first
#[tokio::test]
async fn filters_by_status_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::channel::create_private_channel(db).await?;
    let other = factory::channel::create_private_channel(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let rejected = factory::user::create_user(db).await?;

    let (first_request, _) =
        factory::request::create_join_request(db, channel.id, first.id).await?;
    let (second_request, _) =
        factory::request::create_join_request(db, channel.id, second.id).await?;
    factory::request::create_join_request_with_status(
        db,
        channel.id,
        rejected.id,
        RequestStatus::Rejected,
    )
    .await?;
    factory::request::create_join_request(db, other.id, first.id).await?;

    let repo = JoinRequestRepository::new(db);

    let pending = repo
        .get_by_channel(channel.id, RequestStatus::Pending)
        .await?;
    assert_eq!(
        pending.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![first_request.id, second_request.id]
    );

    let rejected_list = repo
        .get_by_channel(channel.id, RequestStatus::Rejected)
        .await?;
    assert_eq!(rejected_list.len(), 1);
    assert_eq!(rejected_list[0].user_id, rejected.id);

    Ok(())
}
