use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(pk_auto(Request::Id))
                    .col(string(Request::Status).default("pending"))
                    .col(text_null(Request::Message))
                    .col(timestamp_with_time_zone(Request::CreatedAt))
                    .col(timestamp_with_time_zone_null(Request::ResolvedAt))
                    .col(integer_null(Request::ResolvedBy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    Table,
    Id,
    Status,
    Message,
    CreatedAt,
    ResolvedAt,
    ResolvedBy,
}
