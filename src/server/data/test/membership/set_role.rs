use super::*;

/// Tests promoting a member to admin.
///
/// Expected: Ok(Some) with the Admin role persisted
#[tokio::test]
async fn promotes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let member = factory::helpers::create_member(db, channel.id).await?;

    let repo = MembershipRepository::new(db);
    let updated = repo
        .set_role(channel.id, member.id, ChannelRole::Admin)
        .await?
        .unwrap();

    assert!(updated.is_admin());
    assert_eq!(repo.count_admins(channel.id).await?, 2);

    Ok(())
}

/// Tests changing the role of a user who isn't in the channel.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::channel::create_channel(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = MembershipRepository::new(db);
    let result = repo
        .set_role(channel.id, user.id, ChannelRole::Admin)
        .await?;

    assert!(result.is_none());

    Ok(())
}
