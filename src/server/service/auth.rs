//! Account registration, login and password changes.
//!
//! Passwords are stored as argon2 PHC strings. Login failures for unknown users and
//! wrong passwords surface as the same `AuthError::InvalidCredentials`.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{ChangePasswordParams, CreateUserParams, RegisterParams, User},
    util::validate,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new non-admin account.
    ///
    /// # Arguments
    /// - `params` - Trimmed username and email plus the plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username, email or password fails validation
    /// - `Err(AppError::Conflict)` - Username or email already in use
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        validate::username(&params.username)?;
        validate::email(&params.email)?;
        validate::password(&params.password)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_taken(&params.username, None).await? {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        if user_repo.email_taken(&params.email).await? {
            return Err(AppError::Conflict(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks credentials where `login` is either a username or an email.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown login or wrong password
    pub async fn login(&self, login: &str, password: &str) -> Result<User, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_login(login.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }

    /// Changes a user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::BadRequest)` - New password too short
    /// - `Err(AuthError::IncorrectPassword)` - Current password doesn't match
    /// - `Err(AppError::NotFound)` - User doesn't exist
    pub async fn change_password(&self, params: ChangePasswordParams) -> Result<(), AppError> {
        validate::password(&params.new_password)?;

        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_id(params.user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(&params.current_password, &credentials.password_hash) {
            return Err(AuthError::IncorrectPassword(params.user_id).into());
        }

        let password_hash = hash_password(&params.new_password)?;
        user_repo
            .update_password_hash(params.user_id, password_hash)
            .await?;

        Ok(())
    }
}

/// Hashes a password with argon2 and a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored hash. Unparsable hashes never match.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let hash = match PasswordHash::new(password_hash) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}
