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
                    .table(TopTmdb::Table)
                    .if_not_exists()
                    .col(pk_auto(TopTmdb::Id))
                    .col(integer(TopTmdb::UserId))
                    .col(string(TopTmdb::TmdbId))
                    .col(string(TopTmdb::MediaType))
                    .col(integer(TopTmdb::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_top_tmdb_user_id")
                            .from(TopTmdb::Table, TopTmdb::UserId)
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
                    .name("idx_top_tmdb_user_id_position")
                    .table(TopTmdb::Table)
                    .col(TopTmdb::UserId)
                    .col(TopTmdb::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TopTmdb::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TopTmdb {
    Table,
    Id,
    UserId,
    TmdbId,
    MediaType,
    Position,
}
