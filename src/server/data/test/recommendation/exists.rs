use super::*;

/// Tests the duplicate check for recommendations.
///
/// Verifies that the check matches on channel, source and external ID together.
///
/// Expected: Ok(true) only for the exact triple
#[tokio::test]
async fn matches_channel_source_and_external_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, channel) = factory::helpers::create_channel_with_admin(db).await?;
    let other = factory::channel::create_channel(db).await?;
    factory::recommendation::RecommendationFactory::new(db, channel.id, admin.id)
        .source(RecommendationSource::TmdbTv)
        .external_id("1399")
        .build()
        .await?;

    let repo = RecommendationRepository::new(db);

    assert!(
        repo.exists(channel.id, RecommendationSource::TmdbTv, "1399")
            .await?
    );
    assert!(
        !repo
            .exists(channel.id, RecommendationSource::TmdbMovie, "1399")
            .await?
    );
    assert!(
        !repo
            .exists(other.id, RecommendationSource::TmdbTv, "1399")
            .await?
    );

    Ok(())
}
