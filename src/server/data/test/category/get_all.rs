use super::*;

/// Tests listing categories with channel counts.
///
/// Verifies that categories are ordered by name and each carries the number of
/// channels bound to it.
///
/// Expected: Ok with ordered categories and correct counts
#[tokio::test]
async fn returns_categories_with_channel_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rock = factory::category::CategoryFactory::new(db)
        .name("Rock")
        .build()
        .await?;
    let film = factory::category::CategoryFactory::new(db)
        .name("Film")
        .build()
        .await?;

    factory::channel::ChannelFactory::new(db)
        .categories(vec![rock.id, film.id])
        .build()
        .await?;
    factory::channel::ChannelFactory::new(db)
        .categories(vec![rock.id])
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Film");
    assert_eq!(categories[0].channel_count, 1);
    assert_eq!(categories[1].name, "Rock");
    assert_eq!(categories[1].channel_count, 2);

    let single = repo.get_by_id(rock.id).await?.unwrap();
    assert_eq!(single.channel_count, 2);

    Ok(())
}
