use super::*;

/// Tests looking up credentials by username and by email.
///
/// Verifies that either login form resolves to the same account.
///
/// Expected: Ok(Some) for username and email
#[tokio::test]
async fn finds_by_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("bob")
        .email("bob@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let by_name = repo.find_credentials_by_login("bob").await?.unwrap();
    let by_email = repo
        .find_credentials_by_login("bob@example.com")
        .await?
        .unwrap();

    assert_eq!(by_name.user.id, user.id);
    assert_eq!(by_email.user.id, user.id);

    Ok(())
}

/// Tests looking up an unknown login.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_login("nobody").await?;

    assert!(result.is_none());

    Ok(())
}
