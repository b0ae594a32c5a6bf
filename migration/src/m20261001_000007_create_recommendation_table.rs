use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;
use super::m20261001_000003_create_channel_table::Channel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recommendation::Table)
                    .if_not_exists()
                    .col(pk_auto(Recommendation::Id))
                    .col(integer(Recommendation::ChannelId))
                    .col(integer(Recommendation::UserId))
                    .col(string(Recommendation::Source))
                    .col(string(Recommendation::ExternalId))
                    .col(string(Recommendation::Title))
                    .col(text_null(Recommendation::Comment))
                    .col(timestamp_with_time_zone(Recommendation::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recommendation_channel_id")
                            .from(Recommendation::Table, Recommendation::ChannelId)
                            .to(Channel::Table, Channel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recommendation_user_id")
                            .from(Recommendation::Table, Recommendation::UserId)
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
                    .name("idx_recommendation_channel_source_external_id")
                    .table(Recommendation::Table)
                    .col(Recommendation::ChannelId)
                    .col(Recommendation::Source)
                    .col(Recommendation::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recommendation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recommendation {
    Table,
    Id,
    ChannelId,
    UserId,
    Source,
    ExternalId,
    Title,
    Comment,
    CreatedAt,
}
