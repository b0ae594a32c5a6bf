use super::*;

fn song(spotify_id: &str, position: i32) -> TopSong {
    TopSong {
        spotify_id: spotify_id.to_string(),
        position,
    }
}

/// Tests replacing a user's top songs.
///
/// Verifies that the previous list is discarded and the new entries come back
/// ordered by position.
///
/// Expected: Ok with only the new entries
#[tokio::test]
async fn replaces_existing_songs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TopListRepository::new(db);
    repo.replace_songs(user.id, vec![song("old-1", 1), song("old-2", 2)])
        .await?;

    let songs = repo
        .replace_songs(user.id, vec![song("new-3", 3), song("new-1", 1)])
        .await?;

    assert_eq!(songs, vec![song("new-1", 1), song("new-3", 3)]);

    Ok(())
}

/// Tests that one user's list doesn't affect another's.
///
/// Expected: Ok with each user's list intact
#[tokio::test]
async fn keeps_lists_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = TopListRepository::new(db);
    let entry = TopTmdb {
        tmdb_id: "550".to_string(),
        media_type: TmdbMediaType::Movie,
        position: 1,
    };
    repo.replace_tmdb(first.id, vec![entry.clone()]).await?;
    repo.replace_tmdb(second.id, vec![]).await?;

    assert_eq!(repo.get_tmdb(first.id).await?, vec![entry]);
    assert!(repo.get_tmdb(second.id).await?.is_empty());

    Ok(())
}
