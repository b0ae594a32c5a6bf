//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Category {}", next_id()),
            description: None,
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

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
