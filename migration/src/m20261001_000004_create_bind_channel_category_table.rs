use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_category_table::Category;
use super::m20261001_000003_create_channel_table::Channel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BindChannelCategory::Table)
                    .if_not_exists()
                    .col(integer(BindChannelCategory::ChannelId))
                    .col(integer(BindChannelCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(BindChannelCategory::ChannelId)
                            .col(BindChannelCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bind_channel_category_channel_id")
                            .from(BindChannelCategory::Table, BindChannelCategory::ChannelId)
                            .to(Channel::Table, Channel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bind_channel_category_category_id")
                            .from(BindChannelCategory::Table, BindChannelCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BindChannelCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BindChannelCategory {
    Table,
    ChannelId,
    CategoryId,
}
