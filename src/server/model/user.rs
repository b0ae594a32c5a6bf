//! User domain models and parameters.
//!
//! Provides the domain model for application accounts along with the parameter types
//! used by registration, profile updates, password changes and admin management.

use chrono::{DateTime, Utc};

use crate::model::{
    auth::RegisterDto,
    user::{ChangePasswordDto, CurrentUserDto, PaginatedUsersDto, UpdateProfileDto, UserDto},
};

/// Application account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Auto-increment ID of the user.
    pub id: i32,
    /// Unique login and display name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Optional free-form profile text.
    pub bio: Option<String>,
    /// Whether the user has global admin privileges.
    pub admin: bool,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped; use `UserCredentials` where it is needed.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            bio: entity.bio,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }

    /// Converts the user to its public profile DTO. The email is not included.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            bio: self.bio,
            admin: self.admin,
            created_at: self.created_at,
        }
    }

    /// Converts the user to the DTO returned to the account owner.
    pub fn into_current_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            bio: self.bio,
            admin: self.admin,
            created_at: self.created_at,
        }
    }
}

/// User together with the stored argon2 password hash.
///
/// Only produced for login and password changes.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    /// Plain text password, hashed by the auth service before storage.
    pub password: String,
}

impl RegisterParams {
    /// Converts the registration DTO, trimming username and email.
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Parameters for updating the caller's own profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub user_id: i32,
    pub username: String,
    pub bio: Option<String>,
}

impl UpdateProfileParams {
    /// Converts the DTO; an empty or whitespace-only bio clears it.
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            username: dto.username.trim().to_string(),
            bio: dto
                .bio
                .map(|bio| bio.trim().to_string())
                .filter(|bio| !bio.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChangePasswordParams {
    pub user_id: i32,
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordParams {
    pub fn from_dto(user_id: i32, dto: ChangePasswordDto) -> Self {
        Self {
            user_id,
            current_password: dto.current_password,
            new_password: dto.new_password,
        }
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
