use super::*;

/// Tests updating a category.
///
/// Expected: Ok(Some) with new name and description
#[tokio::test]
async fn updates_name_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: category.id,
            name: "Ambient".to_string(),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Ambient");
    assert_eq!(updated.description, None);

    Ok(())
}

/// Tests updating a category that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo
        .update(UpdateCategoryParams {
            id: 7,
            name: "Ambient".to_string(),
            description: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
