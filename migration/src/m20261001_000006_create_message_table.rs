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
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(integer(Message::ChannelId))
                    .col(integer(Message::UserId))
                    .col(string(Message::Kind).default("text"))
                    .col(text(Message::Content))
                    .col(string_null(Message::FilePath))
                    .col(string_null(Message::ContentType))
                    .col(big_integer_null(Message::FileSize))
                    .col(timestamp_with_time_zone(Message::CreatedAt))
                    .col(timestamp_with_time_zone_null(Message::EditedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_channel_id")
                            .from(Message::Table, Message::ChannelId)
                            .to(Channel::Table, Channel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_user_id")
                            .from(Message::Table, Message::UserId)
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
                    .name("idx_message_channel_id_created_at")
                    .table(Message::Table)
                    .col(Message::ChannelId)
                    .col(Message::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    ChannelId,
    UserId,
    Kind,
    Content,
    FilePath,
    ContentType,
    FileSize,
    CreatedAt,
    EditedAt,
}
