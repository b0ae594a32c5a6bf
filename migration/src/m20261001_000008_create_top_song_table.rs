use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TopSong::Table)
                    .if_not_exists()
                    .col(pk_auto(TopSong::Id))
                    .col(integer(TopSong::UserId))
                    .col(string(TopSong::SpotifyId))
                    .col(integer(TopSong::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_top_song_user_id")
                            .from(TopSong::Table, TopSong::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_top_song_user_id_position")
                    .table(TopSong::Table)
                    .col(TopSong::UserId)
                    .col(TopSong::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TopSong::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TopSong {
    Table,
    Id,
    UserId,
    SpotifyId,
    Position,
}
