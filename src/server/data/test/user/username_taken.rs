use super::*;

/// Tests the username clash check used by profile updates.
///
/// Verifies that a user's own username is not reported as taken when the user is
/// excluded, while another user's username is.
///
/// Expected: Ok(false) for own name, Ok(true) for another user's name
#[tokio::test]
async fn excludes_own_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.username_taken("alice", Some(alice.id)).await?);
    assert!(repo.username_taken("bob", Some(alice.id)).await?);
    assert!(repo.username_taken("alice", None).await?);
    assert!(!repo.username_taken("carol", None).await?);

    Ok(())
}
