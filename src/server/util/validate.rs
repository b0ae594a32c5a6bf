//! Input validation shared by the services.
//!
//! Every check returns `AppError::BadRequest` with a message suitable for showing
//! to the client.

use email_address::EmailAddress;

use crate::server::error::AppError;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks a username is 3 to 32 characters of ASCII letters, digits, `_` or `-`.
pub fn username(value: &str) -> Result<(), AppError> {
    let len = value.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(AppError::BadRequest(format!(
            "Username must be between {} and {} characters",
            MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
        )));
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::BadRequest(
            "Username may only contain letters, digits, '_' and '-'".to_string(),
        ));
    }

    Ok(())
}

pub fn email(value: &str) -> Result<(), AppError> {
    if !EmailAddress::is_valid(value) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    Ok(())
}

pub fn password(value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

/// Checks that a required text field is non-empty and at most `max` characters.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Already trimmed value
/// - `max` - Maximum length in characters
pub fn required_text(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    max_length(field, value, max)
}

/// Checks that a text field is at most `max` characters.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}

/// Same as `max_length` for optional fields; `None` always passes.
pub fn optional_max_length(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(value) => max_length(field, value, max),
        None => Ok(()),
    }
}
