use super::*;

/// Tests creating a recommendation.
///
/// Expected: Ok with the author's username attached
#[tokio::test]
async fn creates_recommendation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;

    let repo = RecommendationRepository::new(db);
    let recommendation = repo
        .create(CreateRecommendationParams {
            channel_id: channel.id,
            user_id: admin.id,
            source: RecommendationSource::TmdbMovie,
            external_id: "603".to_string(),
            title: "The Matrix".to_string(),
            comment: Some("Still holds up".to_string()),
        })
        .await?;

    assert_eq!(recommendation.source, RecommendationSource::TmdbMovie);
    assert_eq!(recommendation.external_id, "603");
    assert_eq!(recommendation.username, admin.username);

    Ok(())
}

/// Tests that the same item can't be recommended twice in one channel.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    factory::recommendation::RecommendationFactory::new(db, channel.id, admin.id)
        .external_id("track-1")
        .build()
        .await?;

    let repo = RecommendationRepository::new(db);
    let result = repo
        .create(CreateRecommendationParams {
            channel_id: channel.id,
            user_id: admin.id,
            source: RecommendationSource::SpotifyTrack,
            external_id: "track-1".to_string(),
            title: "Again".to_string(),
            comment: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
