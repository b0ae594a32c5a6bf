use super::*;
use crate::server::{
    data::membership::MembershipRepository,
    model::join_request::{CreateJoinRequestParams, RequestDecision},
    service::join_request::JoinRequestService,
};
use entity::request::RequestStatus;

fn params(channel_id: i32, user_id: i32) -> CreateJoinRequestParams {
    CreateJoinRequestParams {
        channel_id,
        user_id,
        message: None,
    }
}

/// Tests the preconditions for creating a join request.
///
/// Expected: BadRequest for public channels, Conflict for members and for a
/// second pending request
#[tokio::test]
async fn create_rules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let public = factory::channel::create_channel(db).await?;
    let private = factory::channel::create_private_channel(db).await?;
    let member = factory::user::create_user(db).await?;
    factory::channel_user::create_membership(db, private.id, member.id).await?;
    let user = factory::user::create_user(db).await?;

    let service = JoinRequestService::new(db);

    assert!(matches!(
        service.create(params(public.id, user.id)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(params(private.id, member.id)).await,
        Err(AppError::Conflict(_))
    ));

    let request = service.create(params(private.id, user.id)).await?;
    assert!(request.is_pending());

    assert!(matches!(
        service.create(params(private.id, user.id)).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests resolving requests.
///
/// Verifies that a request must belong to the channel in question and can only be
/// resolved while pending.
///
/// Expected: NotFound for the wrong channel, BadRequest on a second decision
#[tokio::test]
async fn resolve_rules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let other = factory::channel::create_private_channel(db).await?;
    let user = factory::user::create_user(db).await?;
    let (request, _) = factory::request::create_join_request(db, channel.id, user.id).await?;

    let service = JoinRequestService::new(db);

    assert!(matches!(
        service
            .resolve(other.id, request.id, RequestDecision::Approve, admin.id)
            .await,
        Err(AppError::NotFound(_))
    ));

    let approved = service
        .resolve(channel.id, request.id, RequestDecision::Approve, admin.id)
        .await?;
    assert_eq!(approved.status, RequestStatus::Approved);
    assert!(MembershipRepository::new(db)
        .find(channel.id, user.id)
        .await?
        .is_some());

    assert!(matches!(
        service
            .resolve(channel.id, request.id, RequestDecision::Reject, admin.id)
            .await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests cancelling join requests.
///
/// Expected: AccessDenied for someone else's request, BadRequest once resolved,
/// Ok for the requester's own pending request
#[tokio::test]
async fn cancel_rules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::channel::create_private_channel(db).await?;
    let requester = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let (pending, _) =
        factory::request::create_join_request(db, channel.id, requester.id).await?;
    let (rejected, _) = factory::request::create_join_request_with_status(
        db,
        channel.id,
        stranger.id,
        RequestStatus::Rejected,
    )
    .await?;

    let service = JoinRequestService::new(db);

    assert!(matches!(
        service.cancel(pending.id, stranger.id).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.cancel(rejected.id, stranger.id).await,
        Err(AppError::BadRequest(_))
    ));

    service.cancel(pending.id, requester.id).await?;
    assert!(service.list_for_user(requester.id).await?.is_empty());

    Ok(())
}
