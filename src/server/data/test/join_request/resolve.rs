use super::*;
use crate::server::data::membership::MembershipRepository;
use entity::channel_user::ChannelRole;

/// Tests approving a join request.
///
/// Verifies that the request records its resolution and the requester is added
/// to the channel as a Member.
///
/// Expected: Ok(Some) with Approved status and a new membership
#[tokio::test]
async fn approve_adds_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let user = factory::user::create_user(db).await?;
    let (request, _) = factory::request::create_join_request(db, channel.id, user.id).await?;

    let repo = JoinRequestRepository::new(db);
    let resolved = repo
        .resolve(request.id, RequestDecision::Approve, admin.id)
        .await?
        .unwrap();

    assert_eq!(resolved.status, RequestStatus::Approved);
    assert_eq!(resolved.resolved_by, Some(admin.id));
    assert!(resolved.resolved_at.is_some());

    let membership = MembershipRepository::new(db)
        .find(channel.id, user.id)
        .await?
        .unwrap();
    assert_eq!(membership.role, ChannelRole::Member);

    Ok(())
}

/// Tests approving a request from a user who is already a member.
///
/// Expected: Ok(Some) and the existing Admin role is left untouched
#[tokio::test]
async fn approve_keeps_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let (request, _) = factory::request::create_join_request(db, channel.id, admin.id).await?;

    let repo = JoinRequestRepository::new(db);
    repo.resolve(request.id, RequestDecision::Approve, admin.id)
        .await?
        .unwrap();

    let membership = MembershipRepository::new(db)
        .find(channel.id, admin.id)
        .await?
        .unwrap();
    assert_eq!(membership.role, ChannelRole::Admin);

    Ok(())
}

/// Tests rejecting a join request.
///
/// Expected: Ok(Some) with Rejected status and no membership created
#[tokio::test]
async fn reject_does_not_add_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let user = factory::user::create_user(db).await?;
    let (request, _) = factory::request::create_join_request(db, channel.id, user.id).await?;

    let repo = JoinRequestRepository::new(db);
    let resolved = repo
        .resolve(request.id, RequestDecision::Reject, admin.id)
        .await?
        .unwrap();

    assert_eq!(resolved.status, RequestStatus::Rejected);
    assert!(MembershipRepository::new(db)
        .find(channel.id, user.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests resolving a request that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user(db).await?;

    let repo = JoinRequestRepository::new(db);
    let result = repo
        .resolve(404, RequestDecision::Reject, admin.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a request can only be decided once.
///
/// Verifies that a second decision on an already resolved request changes nothing,
/// so a late reject can't overwrite an approval.
///
/// Expected: Ok(None) for the second call and the first decision kept
#[tokio::test]
async fn second_decision_is_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let second_admin = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let (request, _) = factory::request::create_join_request(db, channel.id, user.id).await?;

    let repo = JoinRequestRepository::new(db);
    repo.resolve(request.id, RequestDecision::Approve, first_admin.id)
        .await?
        .unwrap();

    let late = repo
        .resolve(request.id, RequestDecision::Reject, second_admin.id)
        .await?;
    assert!(late.is_none());

    let stored = repo.get_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Approved);
    assert_eq!(stored.resolved_by, Some(first_admin.id));

    Ok(())
}
