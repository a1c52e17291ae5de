use validator::ValidateEmail;

use crate::error::ApiError;

pub const MAX_DISPLAY_NAME_CHARS: usize = 40;
const MAX_PHOTO_URL_LEN: usize = 2048;

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::Validation("Email cannot be empty".to_string()));
    }

    if !email.validate_email() {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

/// At least 8 characters with one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    // bcrypt ignores everything past 72 bytes
    if password.len() > 72 {
        return Err(ApiError::Validation(
            "Password must be at most 72 bytes long".to_string(),
        ));
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_number = password.chars().any(char::is_numeric);

    if !has_letter || !has_number {
        return Err(ApiError::Validation(
            "Password must contain at least one letter and one number".to_string(),
        ));
    }

    Ok(())
}

/// Display names are shown on the leaderboard: printable, no markup.
pub fn validate_display_name(name: &str) -> Result<(), ApiError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ApiError::Validation(
            "Display name cannot be empty".to_string(),
        ));
    }

    if trimmed.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err(ApiError::Validation(format!(
            "Display name must be at most {MAX_DISPLAY_NAME_CHARS} characters long"
        )));
    }

    if trimmed
        .chars()
        .any(|c| c.is_control() || matches!(c, '<' | '>' | '&' | '"'))
    {
        return Err(ApiError::Validation(
            "Display name contains invalid characters".to_string(),
        ));
    }

    Ok(())
}

/// Only HTTPS URLs and inline images are accepted as avatars.
pub fn validate_photo_url(url: &str) -> Result<(), ApiError> {
    if url.is_empty() {
        return Ok(());
    }

    if url.len() > MAX_PHOTO_URL_LEN {
        return Err(ApiError::Validation("Photo URL is too long".to_string()));
    }

    if !url.starts_with("https://") && !url.starts_with("data:image/") {
        return Err(ApiError::Validation(
            "Photo URL must use HTTPS or be a data:image URI".to_string(),
        ));
    }

    let lower = url.to_lowercase();
    if ["javascript:", "<script", "onerror=", "onload="]
        .iter()
        .any(|pattern| lower.contains(pattern))
    {
        return Err(ApiError::Validation(
            "Photo URL contains invalid patterns".to_string(),
        ));
    }

    Ok(())
}

/// Fallback display name for a new account: the local part of the email.
pub fn default_display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local.chars().take(MAX_DISPLAY_NAME_CHARS).collect()
}
