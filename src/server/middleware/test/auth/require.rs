use super::*;

mod require_admin;
mod require_channel_admin;
mod require_channel_member;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(77).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(77)))
    ));

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, user.username);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Expected: Err(AuthError::AccessDenied) when one of two permissions is missing
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let member = factory::helpers::create_member(db, channel.id).await?;
    AuthSession::new(session).set_user_id(member.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[
            Permission::ChannelMember(channel.id),
            Permission::ChannelAdmin(channel.id),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == member.id
    ));

    Ok(())
}
