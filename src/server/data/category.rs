//! Category data repository.
//!
//! Categories are created and maintained by global admins and bound to channels
//! through the `bind_channel_category` table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::category::{Category, CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category with no channels bound to it
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity, 0))
    }

    /// Gets a category by ID with its channel count
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let Some(entity) = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let channel_count = entity::prelude::BindChannelCategory::find()
            .filter(entity::bind_channel_category::Column::CategoryId.eq(id))
            .count(self.db)
            .await?;

        Ok(Some(Category::from_entity(entity, channel_count)))
    }

    /// Gets all categories ordered by name, each with its channel count
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        for binding in entity::prelude::BindChannelCategory::find()
            .all(self.db)
            .await?
        {
            *counts.entry(binding.category_id).or_default() += 1;
        }

        Ok(categories
            .into_iter()
            .map(|c| {
                let count = counts.get(&c.id).copied().unwrap_or(0);
                Category::from_entity(c, count)
            })
            .collect())
    }

    /// Updates name and description of a category
    /// Returns None if the category doesn't exist
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, DbErr> {
        let Some(existing) = entity::prelude::Category::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.update(self.db).await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a category; channel bindings cascade
    /// Returns true if a row was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a category name is used by a category other than `exclude_id`
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Category::find().filter(entity::category::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Returns the subset of `ids` that refer to existing categories
    pub async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let categories = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(|c| c.id).collect())
    }
}
