use super::*;

/// Tests that a channel admin passes the channel admin check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_channel_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::ChannelAdmin(channel.id)])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(!user.admin);

    Ok(())
}

/// Tests that a plain member is denied the channel admin check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_plain_member() -> Result<(), AppError> {
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
        .require(&[Permission::ChannelAdmin(channel.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
