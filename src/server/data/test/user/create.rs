use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts a non-admin user with the provided
/// username, email and password hash.
///
/// Expected: Ok with non-admin user and stored hash
#[tokio::test]
async fn creates_non_admin_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.admin);
    assert_eq!(user.bio, None);

    let credentials = repo.find_credentials_by_id(user.id).await?.unwrap();
    assert_eq!(credentials.password_hash, "hash");

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Verifies that inserting a second user with an existing username fails at the
/// database level.
///
/// Expected: Err from the unique index
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
