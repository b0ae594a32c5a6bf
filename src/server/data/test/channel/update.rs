use super::*;

/// Tests that updating a channel replaces its category set.
///
/// Expected: Ok(Some) with new fields and only the new categories bound
#[tokio::test]
async fn replaces_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::category::create_category(db).await?;
    let new = factory::category::create_category(db).await?;
    let channel = factory::channel::ChannelFactory::new(db)
        .categories(vec![old.id])
        .build()
        .await?;

    let repo = ChannelRepository::new(db);
    let updated = repo
        .update(UpdateChannelParams {
            id: channel.id,
            name: "Renamed".to_string(),
            description: Some("Now with a description".to_string()),
            is_private: true,
            category_ids: vec![new.id],
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.is_private);
    assert_eq!(updated.categories.len(), 1);
    assert_eq!(updated.categories[0].id, new.id);

    Ok(())
}

/// Tests updating a channel that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelRepository::new(db);
    let result = repo
        .update(UpdateChannelParams {
            id: 99,
            name: "Ghost".to_string(),
            description: None,
            is_private: false,
            category_ids: vec![],
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
