use super::*;
use entity::channel_user::ChannelRole;

/// Tests creating a channel with categories.
///
/// Verifies that the channel is created with its category bindings and that the
/// creator becomes the channel's only member with the Admin role.
///
/// Expected: Ok with categories ordered by name and member count 1
#[tokio::test]
async fn creates_channel_with_creator_as_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let soul = factory::category::CategoryFactory::new(db)
        .name("Soul")
        .build()
        .await?;
    let funk = factory::category::CategoryFactory::new(db)
        .name("Funk")
        .build()
        .await?;

    let repo = ChannelRepository::new(db);
    let channel = repo
        .create(CreateChannelParams {
            creator_id: creator.id,
            name: "Groove".to_string(),
            description: None,
            is_private: true,
            category_ids: vec![soul.id, funk.id],
        })
        .await?;

    assert_eq!(channel.name, "Groove");
    assert!(channel.is_private);
    assert_eq!(channel.member_count, 1);
    assert_eq!(
        channel
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Funk", "Soul"]
    );

    let membership = crate::server::data::membership::MembershipRepository::new(db)
        .find(channel.id, creator.id)
        .await?
        .unwrap();
    assert_eq!(membership.role, ChannelRole::Admin);

    Ok(())
}

/// Tests that a failing category binding rolls back the whole creation.
///
/// Expected: Err and no channel row left behind
#[tokio::test]
async fn rolls_back_on_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;

    let repo = ChannelRepository::new(db);
    let result = repo
        .create(CreateChannelParams {
            creator_id: creator.id,
            name: "Orphan".to_string(),
            description: None,
            is_private: false,
            category_ids: vec![4242],
        })
        .await;

    assert!(result.is_err());
    assert!(!repo.name_taken("Orphan", None).await?);

    Ok(())
}
