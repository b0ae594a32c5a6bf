use super::*;

/// Tests filtering category IDs down to existing categories.
///
/// Expected: Ok with only the IDs that exist
#[tokio::test]
async fn filters_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_channel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let existing = repo.find_existing_ids(&[category.id, 9999]).await?;

    assert_eq!(existing, vec![category.id]);
    assert!(repo.find_existing_ids(&[]).await?.is_empty());

    Ok(())
}
