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
                    .table(ChannelUser::Table)
                    .if_not_exists()
                    .col(integer(ChannelUser::ChannelId))
                    .col(integer(ChannelUser::UserId))
                    .col(string(ChannelUser::Role).default("member"))
                    .col(timestamp_with_time_zone(ChannelUser::JoinedAt))
                    .primary_key(
                        Index::create()
                            .col(ChannelUser::ChannelId)
                            .col(ChannelUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_user_channel_id")
                            .from(ChannelUser::Table, ChannelUser::ChannelId)
                            .to(Channel::Table, Channel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_user_user_id")
                            .from(ChannelUser::Table, ChannelUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChannelUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelUser {
    Table,
    ChannelId,
    UserId,
    Role,
    JoinedAt,
}
