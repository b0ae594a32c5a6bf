use super::*;

/// Tests listing recommendations with a source filter.
///
/// Expected: Ok with only matching recommendations and a matching total
#[tokio::test]
async fn filters_by_source() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    factory::recommendation::create_recommendation(db, channel.id, admin.id).await?;
    factory::recommendation::create_recommendation(db, channel.id, admin.id).await?;
    factory::recommendation::RecommendationFactory::new(db, channel.id, admin.id)
        .source(RecommendationSource::TmdbMovie)
        .build()
        .await?;

    let repo = RecommendationRepository::new(db);

    let (all, total) = repo
        .get_paginated_by_channel(channel.id, None, 0, 10)
        .await?;
    assert_eq!(total, 3);
    assert_eq!(all.len(), 3);

    let (movies, total) = repo
        .get_paginated_by_channel(channel.id, Some(RecommendationSource::TmdbMovie), 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(movies[0].source, RecommendationSource::TmdbMovie);

    Ok(())
}
