use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to produce a password hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// The rate limiter rejected its own configuration.
    #[error("Invalid rate limiter configuration")]
    RateLimitConfig,

    /// The session store could not create its table.
    #[error("Failed to migrate session store: {0}")]
    SessionStore(String),
}
