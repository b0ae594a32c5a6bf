use super::*;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

/// Tests deleting a channel with members, messages and join requests.
///
/// Expected: Ok(true) with all rows referencing the channel removed
#[tokio::test]
async fn removes_everything_in_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category(db).await?;
    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let outsider = factory::user::create_user(db).await?;
    factory::message::create_message(db, channel.id, admin.id).await?;
    factory::recommendation::create_recommendation(db, channel.id, admin.id).await?;
    factory::request::create_join_request(db, channel.id, outsider.id).await?;

    let repo = ChannelRepository::new(db);
    assert!(repo.delete(channel.id).await?);

    assert!(repo.get_by_id(channel.id).await?.is_none());
    assert_eq!(entity::prelude::ChannelUser::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Message::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Recommendation::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Request::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}

/// Tests that join requests survive when the channel row can't be deleted.
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
        r#"CREATE TRIGGER block_channel_delete BEFORE DELETE ON "channel"
           BEGIN SELECT RAISE(ABORT, 'blocked'); END"#,
    )
    .await?;

    let repo = ChannelRepository::new(db);
    assert!(repo.delete(private.id).await.is_err());

    assert!(repo.get_by_id(private.id).await?.is_some());
    assert_eq!(entity::prelude::Request::find().count(db).await?, 1);

    Ok(())
}
