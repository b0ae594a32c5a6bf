//! Global administration: admin claim codes, admin flags and user removal.

pub mod code;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{message::MessageRepository, user::UserRepository},
    error::AppError,
    model::{
        total_pages,
        user::{PaginatedUsers, User},
    },
    service::admin::code::AdminCodeService,
    util::storage::FileStorage,
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants admin to `user_id` if `code` matches the active claim code.
    ///
    /// # Returns
    /// - `Ok(User)` - The user, now an admin
    /// - `Err(AppError::BadRequest)` - Wrong, expired or already used code
    pub async fn claim(
        &self,
        codes: &AdminCodeService,
        user_id: i32,
        code: &str,
    ) -> Result<User, AppError> {
        if !codes.redeem(code.trim()).await {
            return Err(AppError::BadRequest(
                "Invalid or expired admin code".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        user_repo.set_admin(user_id, true).await?;

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("User {} claimed admin with the startup code", user.id);

        Ok(user)
    }

    /// Lists all users ordered by username.
    pub async fn list_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn grant_admin(&self, user_id: i32) -> Result<User, AppError> {
        self.set_admin(user_id, true).await
    }

    /// Removes the admin flag from a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::BadRequest)` - The user is the last admin
    pub async fn revoke_admin(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if user.admin && user_repo.count_admins().await? <= 1 {
            return Err(AppError::BadRequest(
                "Cannot revoke the last admin".to_string(),
            ));
        }

        self.set_admin(user_id, false).await
    }

    /// Deletes a user and everything they own, then removes their uploaded files.
    ///
    /// # Arguments
    /// - `actor_id` - Admin performing the delete
    /// - `user_id` - User to delete
    /// - `storage` - Upload storage holding the user's files
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - Admin tried to delete themselves
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn delete_user(
        &self,
        actor_id: i32,
        user_id: i32,
        storage: &FileStorage,
    ) -> Result<(), AppError> {
        if actor_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let files = MessageRepository::new(self.db)
            .file_paths_by_user(user_id)
            .await?;

        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        storage.remove_all(&files).await;

        tracing::info!("Admin {} deleted user {}", actor_id, user_id);

        Ok(())
    }

    async fn set_admin(&self, user_id: i32, admin: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo.set_admin(user_id, admin).await?;

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
