use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;
use super::m20261001_000003_create_channel_table::Channel;
use super::m20261001_000010_create_request_table::Request;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BindRequestChannelUser::Table)
                    .if_not_exists()
                    .col(integer(BindRequestChannelUser::RequestId).primary_key())
                    .col(integer(BindRequestChannelUser::ChannelId))
                    .col(integer(BindRequestChannelUser::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bind_request_channel_user_request_id")
                            .from(
                                BindRequestChannelUser::Table,
                                BindRequestChannelUser::RequestId,
                            )
                            .to(Request::Table, Request::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bind_request_channel_user_channel_id")
                            .from(
                                BindRequestChannelUser::Table,
                                BindRequestChannelUser::ChannelId,
                            )
                            .to(Channel::Table, Channel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bind_request_channel_user_user_id")
                            .from(BindRequestChannelUser::Table, BindRequestChannelUser::UserId)
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
            .drop_table(
                Table::drop()
                    .table(BindRequestChannelUser::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum BindRequestChannelUser {
    Table,
    RequestId,
    ChannelId,
    UserId,
}
