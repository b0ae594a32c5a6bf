use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns users ordered by username in pages of the
/// requested size, along with the total number of users.
///
/// Expected: Ok with correct page of users and total count
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["erin", "carol", "alice", "dave", "bob"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(
        users.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
        vec!["alice", "bob"]
    );

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "erin");

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with empty page and unchanged total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(5, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
