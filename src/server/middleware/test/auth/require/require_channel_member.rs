use super::*;

/// Tests that a channel member passes the membership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let member = factory::helpers::create_member(db, channel.id).await?;
    AuthSession::new(session).set_user_id(member.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::ChannelMember(channel.id)])
        .await?;

    assert_eq!(user.id, member.id);

    Ok(())
}

/// Tests that a user outside the channel is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let outsider = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(outsider.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ChannelMember(channel.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a global admin passes without a membership.
///
/// Expected: Ok(User)
#[tokio::test]
async fn global_admin_bypasses_membership() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let channel = factory::channel::create_private_channel(db).await?;
    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::ChannelMember(channel.id)])
        .await?;

    assert!(user.admin);

    Ok(())
}

/// Tests that a missing channel yields NotFound before the membership check.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_channel_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ChannelMember(999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
