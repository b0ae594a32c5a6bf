//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, profile and password updates, lookups for login and
//! admin status management with conversion between entity models and domain models at
//! the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User, UserCredentials};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new non-admin user.
    ///
    /// # Arguments
    /// - `params` - Username, email and already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            bio: ActiveValue::Set(None),
            admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by ID.
    pub async fn find_credentials_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Finds a user and their password hash by username or email.
    ///
    /// # Arguments
    /// - `login` - Either the username or the email address of the account
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - Matching account found
    /// - `Ok(None)` - No account uses that username or email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_login(
        &self,
        login: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(login))
                    .add(entity::user::Column::Email.eq(login)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Checks whether a username is used by an account other than `exclude_id`.
    pub async fn username_taken(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an email address is already registered.
    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates username and bio of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(params.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.username = ActiveValue::Set(params.username);
        active.bio = ActiveValue::Set(params.bio);

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Replaces the stored password hash of a user.
    pub async fn update_password_hash(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets users with pagination.
    ///
    /// Returns a paginated list of all users in the application, ordered alphabetically
    /// by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((Vec<User>, u64))` - Users for the page and the total number of users
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether a one-time admin code must be generated.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        Ok(self.count_admins().await? > 0)
    }

    /// Counts users holding the global admin flag.
    pub async fn count_admins(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await
    }

    /// Sets the global admin flag of a user.
    ///
    /// Setting the flag for a non-existent user is a no-op.
    pub async fn set_admin(&self, user_id: i32, admin: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(admin),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user and everything they own.
    ///
    /// Memberships, messages, recommendations and top lists cascade through their
    /// foreign keys. Join requests are only linked through the binding table, so the
    /// request rows are removed explicitly first, in the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let request_ids: Vec<i32> = entity::prelude::BindRequestChannelUser::find()
            .filter(entity::bind_request_channel_user::Column::UserId.eq(user_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|b| b.request_id)
            .collect();

        if !request_ids.is_empty() {
            entity::prelude::Request::delete_many()
                .filter(entity::request::Column::Id.is_in(request_ids))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
