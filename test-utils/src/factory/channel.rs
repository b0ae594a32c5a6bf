//! Channel factory for creating test channel entities.
//!
//! The factory only inserts the channel row. Use `factory::channel_user` or
//! `factory::helpers::create_channel_with_admin` to add members.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let channel = ChannelFactory::new(&db)
///     .name("Shoegaze")
///     .private(true)
///     .categories(vec![category.id])
///     .build()
///     .await?;
/// ```
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    is_private: bool,
    categories: Vec<i32>,
}

impl<'a> ChannelFactory<'a> {
    /// Creates a new ChannelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Channel {id}"`
    /// - description: `None`
    /// - is_private: `false`
    /// - categories: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Channel {}", next_id()),
            description: None,
            is_private: false,
            categories: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    /// Binds the channel to the given category ids. The categories must exist.
    pub fn categories(mut self, categories: Vec<i32>) -> Self {
        self.categories = categories;
        self
    }

    /// Builds and inserts the channel and its category bindings.
    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        let channel = entity::channel::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            is_private: ActiveValue::Set(self.is_private),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in self.categories {
            entity::bind_channel_category::ActiveModel {
                channel_id: ActiveValue::Set(channel.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(channel)
    }
}

/// Creates a public channel with default values.
pub async fn create_channel(db: &DatabaseConnection) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db).build().await
}

/// Creates a private channel with default values.
pub async fn create_private_channel(
    db: &DatabaseConnection,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db).private(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn creates_channel_with_category_bindings() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_channel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let music = factory::category::create_category(db).await?;
        let film = factory::category::create_category(db).await?;

        let channel = ChannelFactory::new(db)
            .categories(vec![music.id, film.id])
            .build()
            .await?;

        let bound = BindChannelCategory::find()
            .filter(entity::bind_channel_category::Column::ChannelId.eq(channel.id))
            .count(db)
            .await?;
        assert_eq!(bound, 2);
        assert!(!channel.is_private);

        Ok(())
    }
}
