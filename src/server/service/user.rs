//! User profile service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateProfileParams, User},
    util::validate,
};

/// Longest accepted profile bio.
pub const MAX_BIO_LENGTH: usize = 500;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Updates the caller's username and bio.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Invalid username or bio too long
    /// - `Err(AppError::Conflict)` - Username taken by another user
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        validate::username(&params.username)?;
        validate::optional_max_length("Bio", params.bio.as_deref(), MAX_BIO_LENGTH)?;

        let repo = UserRepository::new(self.db);

        if repo
            .username_taken(&params.username, Some(params.user_id))
            .await?
        {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }

        repo.update_profile(params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
