use super::*;

/// Tests creating a category.
///
/// Expected: Ok with the category and a channel count of 0
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Jazz".to_string(),
            description: Some("Bebop and beyond".to_string()),
        })
        .await?;

    assert_eq!(category.name, "Jazz");
    assert_eq!(category.description.as_deref(), Some("Bebop and beyond"));
    assert_eq!(category.channel_count, 0);
    assert!(repo.name_taken("Jazz", None).await?);
    assert!(!repo.name_taken("Jazz", Some(category.id)).await?);

    Ok(())
}
