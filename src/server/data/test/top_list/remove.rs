use super::*;

/// Tests removing the entry at a position.
///
/// Expected: Ok(true) for an occupied position, Ok(false) for an empty one
#[tokio::test]
async fn removes_entry_at_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TopListRepository::new(db);
    repo.replace_songs(
        user.id,
        vec![
            TopSong {
                spotify_id: "a".to_string(),
                position: 1,
            },
            TopSong {
                spotify_id: "b".to_string(),
                position: 2,
            },
        ],
    )
    .await?;

    assert!(repo.remove_song(user.id, 1).await?);
    assert!(!repo.remove_song(user.id, 4).await?);

    let remaining = repo.get_songs(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].position, 2);

    assert!(!repo.remove_tmdb(user.id, 1).await?);

    Ok(())
}
