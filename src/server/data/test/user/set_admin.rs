use super::*;

/// Tests that granting and revoking admin flips the flag and the admin count.
///
/// Expected: one admin after the grant, none after the revoke
#[tokio::test]
async fn grant_then_revoke_updates_admin_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    repo.set_admin(user.id, true).await?;
    assert!(repo.find_by_id(user.id).await?.unwrap().admin);
    assert_eq!(repo.count_admins().await?, 1);

    repo.set_admin(user.id, false).await?;
    assert!(!repo.find_by_id(user.id).await?.unwrap().admin);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests that only the targeted user changes.
///
/// Expected: the other admin keeps the flag, the bystander stays a regular user
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_admin(db).await?;
    let second = factory::user::create_admin(db).await?;
    let bystander = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_admin(first.id, false).await?;

    assert!(repo.find_by_id(second.id).await?.unwrap().admin);
    assert!(!repo.find_by_id(bystander.id).await?.unwrap().admin);
    assert_eq!(repo.count_admins().await?, 1);

    Ok(())
}

/// An unknown user ID updates nothing and is not an error.
#[tokio::test]
async fn unknown_user_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.set_admin(999, true).await?;

    assert_eq!(repo.count_admins().await?, 0);

    Ok(())
}
