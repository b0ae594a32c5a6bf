//! Top list repository for the per-user Top 5 songs and TMDb titles.
//!
//! Replacing a list deletes the user's current entries and inserts the new ones in a
//! single transaction, so readers never observe a partially written list.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::top_list::{TopSong, TopTmdb};

pub struct TopListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopListRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's top songs ordered by position
    pub async fn get_songs(&self, user_id: i32) -> Result<Vec<TopSong>, DbErr> {
        let entries = entity::prelude::TopSong::find()
            .filter(entity::top_song::Column::UserId.eq(user_id))
            .order_by_asc(entity::top_song::Column::Position)
            .all(self.db)
            .await?;

        Ok(entries.into_iter().map(TopSong::from_entity).collect())
    }

    /// Replaces a user's top songs
    pub async fn replace_songs(
        &self,
        user_id: i32,
        entries: Vec<TopSong>,
    ) -> Result<Vec<TopSong>, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::TopSong::delete_many()
            .filter(entity::top_song::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        for entry in entries {
            entity::top_song::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                spotify_id: ActiveValue::Set(entry.spotify_id),
                position: ActiveValue::Set(entry.position),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_songs(user_id).await
    }

    /// Removes the song at a position. Returns true if an entry was removed
    pub async fn remove_song(&self, user_id: i32, position: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TopSong::delete_many()
            .filter(entity::top_song::Column::UserId.eq(user_id))
            .filter(entity::top_song::Column::Position.eq(position))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's top TMDb titles ordered by position
    pub async fn get_tmdb(&self, user_id: i32) -> Result<Vec<TopTmdb>, DbErr> {
        let entries = entity::prelude::TopTmdb::find()
            .filter(entity::top_tmdb::Column::UserId.eq(user_id))
            .order_by_asc(entity::top_tmdb::Column::Position)
            .all(self.db)
            .await?;

        Ok(entries.into_iter().map(TopTmdb::from_entity).collect())
    }

    /// Replaces a user's top TMDb titles
    pub async fn replace_tmdb(
        &self,
        user_id: i32,
        entries: Vec<TopTmdb>,
    ) -> Result<Vec<TopTmdb>, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::TopTmdb::delete_many()
            .filter(entity::top_tmdb::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        for entry in entries {
            entity::top_tmdb::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                tmdb_id: ActiveValue::Set(entry.tmdb_id),
                media_type: ActiveValue::Set(entry.media_type),
                position: ActiveValue::Set(entry.position),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_tmdb(user_id).await
    }

    /// Removes the TMDb title at a position. Returns true if an entry was removed
    pub async fn remove_tmdb(&self, user_id: i32, position: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TopTmdb::delete_many()
            .filter(entity::top_tmdb::Column::UserId.eq(user_id))
            .filter(entity::top_tmdb::Column::Position.eq(position))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
