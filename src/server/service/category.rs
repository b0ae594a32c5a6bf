//! Category service: public listing plus admin-only management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{
        Category, CreateCategoryParams, UpdateCategoryParams, MAX_CATEGORY_NAME_LENGTH,
        MAX_DESCRIPTION_LENGTH,
    },
    util::validate,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by name with channel counts
    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Creates a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - The new category
    /// - `Err(AppError::BadRequest)` - Name empty or too long, description too long
    /// - `Err(AppError::Conflict)` - Name already used
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        validate_fields(&params.name, params.description.as_deref())?;

        let repo = CategoryRepository::new(self.db);

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(
                "A category with this name already exists".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        validate_fields(&params.name, params.description.as_deref())?;

        let repo = CategoryRepository::new(self.db);

        if repo.name_taken(&params.name, Some(params.id)).await? {
            return Err(AppError::Conflict(
                "A category with this name already exists".to_string(),
            ));
        }

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Deletes a category. Channel bindings to it cascade.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }
}

fn validate_fields(name: &str, description: Option<&str>) -> Result<(), AppError> {
    validate::required_text("Name", name, MAX_CATEGORY_NAME_LENGTH)?;
    validate::optional_max_length("Description", description, MAX_DESCRIPTION_LENGTH)
}
