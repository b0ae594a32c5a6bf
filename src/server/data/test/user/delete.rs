use super::*;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

/// Tests deleting a user with memberships, messages and join requests.
///
/// Verifies that owned rows cascade and that join request rows, which are only
/// linked through the binding table, are removed as well.
///
/// Expected: Ok(true) with no rows left referencing the user
#[tokio::test]
async fn removes_owned_rows_and_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let private = factory::channel::create_private_channel(db).await?;
    let user = factory::helpers::create_member(db, channel.id).await?;
    factory::message::create_message(db, channel.id, user.id).await?;
    factory::request::create_join_request(db, private.id, user.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert!(repo.find_by_id(user.id).await?.is_none());
    assert_eq!(entity::prelude::ChannelUser::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Message::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Request::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::BindRequestChannelUser::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests deleting a user that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests that join requests survive when the user row can't be deleted.
///
/// A trigger makes the final delete fail after the request rows were removed.
///
/// Expected: Err and the join request still present
#[tokio::test]
async fn failed_delete_keeps_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let private = factory::channel::create_private_channel(db).await?;
    let user = factory::user::create_user(db).await?;
    factory::request::create_join_request(db, private.id, user.id).await?;

    db.execute_unprepared(
        r#"CREATE TRIGGER block_user_delete BEFORE DELETE ON "user"
           BEGIN SELECT RAISE(ABORT, 'blocked'); END"#,
    )
    .await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await.is_err());

    assert!(repo.find_by_id(user.id).await?.is_some());
    assert_eq!(entity::prelude::Request::find().count(db).await?, 1);

    Ok(())
}
