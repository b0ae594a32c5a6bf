use super::*;

/// Tests counting admins and members of a channel.
///
/// Expected: Ok with admins counted separately from all members
#[tokio::test]
async fn counts_admins_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, channel) = factory::helpers::create_channel_with_admin(db).await?;
    factory::helpers::create_member(db, channel.id).await?;
    factory::helpers::create_member(db, channel.id).await?;

    let repo = MembershipRepository::new(db);

    assert_eq!(repo.count_admins(channel.id).await?, 1);
    assert_eq!(repo.count_members(channel.id).await?, 3);

    Ok(())
}

/// Tests that counts are scoped to a single channel.
///
/// Expected: Ok(0) for a channel without memberships
#[tokio::test]
async fn ignores_other_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_channel_with_admin(db).await?;
    let empty = factory::channel::create_channel(db).await?;

    let repo = MembershipRepository::new(db);

    assert_eq!(repo.count_admins(empty.id).await?, 0);
    assert_eq!(repo.count_members(empty.id).await?, 0);

    Ok(())
}
