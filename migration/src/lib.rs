pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_category_table;
mod m20261001_000003_create_channel_table;
mod m20261001_000004_create_bind_channel_category_table;
mod m20261001_000005_create_channel_user_table;
mod m20261001_000006_create_message_table;
mod m20261001_000007_create_recommendation_table;
mod m20261001_000008_create_top_song_table;
mod m20261001_000009_create_top_tmdb_table;
mod m20261001_000010_create_request_table;
mod m20261001_000011_create_bind_request_channel_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_category_table::Migration),
            Box::new(m20261001_000003_create_channel_table::Migration),
            Box::new(m20261001_000004_create_bind_channel_category_table::Migration),
            Box::new(m20261001_000005_create_channel_user_table::Migration),
            Box::new(m20261001_000006_create_message_table::Migration),
            Box::new(m20261001_000007_create_recommendation_table::Migration),
            Box::new(m20261001_000008_create_top_song_table::Migration),
            Box::new(m20261001_000009_create_top_tmdb_table::Migration),
            Box::new(m20261001_000010_create_request_table::Migration),
            Box::new(m20261001_000011_create_bind_request_channel_user_table::Migration),
        ]
    }
}
