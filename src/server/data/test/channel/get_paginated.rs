use super::*;

/// Tests listing channels ordered by name with pagination.
///
/// Expected: Ok with the requested page and total count
#[tokio::test]
async fn returns_page_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Techno", "Ambient", "Metal"] {
        factory::channel::ChannelFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = ChannelRepository::new(db);
    let (channels, total) = repo
        .get_paginated(&GetChannelsParams {
            page: 0,
            per_page: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        channels.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["Ambient", "Metal"]
    );

    Ok(())
}

/// Tests filtering channels by category.
///
/// Expected: Ok with only channels bound to the category
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let film = factory::category::create_category(db).await?;
    let empty = factory::category::create_category(db).await?;
    let bound = factory::channel::ChannelFactory::new(db)
        .categories(vec![film.id])
        .build()
        .await?;
    factory::channel::create_channel(db).await?;

    let repo = ChannelRepository::new(db);

    let (channels, total) = repo
        .get_paginated(&GetChannelsParams {
            per_page: 10,
            category_id: Some(film.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(channels[0].id, bound.id);

    let (channels, total) = repo
        .get_paginated(&GetChannelsParams {
            per_page: 10,
            category_id: Some(empty.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 0);
    assert!(channels.is_empty());

    Ok(())
}

/// Tests case-insensitive name search.
///
/// Expected: Ok with channels whose name contains the search text in any case
#[tokio::test]
async fn searches_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Late Night Jazz", "jazz fusion", "Drum and Bass"] {
        factory::channel::ChannelFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = ChannelRepository::new(db);
    let (channels, total) = repo
        .get_paginated(&GetChannelsParams {
            per_page: 10,
            search: Some("JAZZ".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert!(channels.iter().all(|c| c.name.to_lowercase().contains("jazz")));

    Ok(())
}

/// Tests that LIKE wildcards in the search text match literally.
///
/// Expected: "a_b" finds only "a_b", and "%" finds nothing without a percent sign
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["a_b", "axb", "100% vinyl"] {
        factory::channel::ChannelFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = ChannelRepository::new(db);
    let search = |text: &str| GetChannelsParams {
        per_page: 10,
        search: Some(text.to_string()),
        ..Default::default()
    };

    let (channels, total) = repo.get_paginated(&search("a_b")).await?;
    assert_eq!(total, 1);
    assert_eq!(channels[0].name, "a_b");

    let (channels, total) = repo.get_paginated(&search("%")).await?;
    assert_eq!(total, 1);
    assert_eq!(channels[0].name, "100% vinyl");

    let (_, total) = repo.get_paginated(&search("_")).await?;
    assert_eq!(total, 1);

    Ok(())
}
