//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the tower-sessions `Session` and is the only place that knows
//! the session key holding the logged-in user's ID.

use tower_sessions::Session;

use crate::server::error::AppError;

pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's ID and the session
/// lifecycle on login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Logs a user in.
    ///
    /// Cycles the session ID before storing the user ID so an identifier issued
    /// before login cannot be reused afterwards.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    /// Stores the user's ID in the session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
