use cq_db::{
    models::{UserCredentials, UserProfile},
    repositories::user as user_repo,
};
use sqlx::PgPool;

use super::validation;
use crate::error::ApiError;

const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| ApiError::Internal(format!("Password hashing task failed: {e}")))?
        .map_err(ApiError::from)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| ApiError::Internal(format!("Password verification task failed: {e}")))?
        .map_err(ApiError::from)
}

/// Create an email + password account.
pub async fn register(
    pool: &PgPool,
    email: &str,
    password: &str,
    display_name: Option<&str>,
    bcrypt_cost: u32,
) -> Result<UserProfile, ApiError> {
    let email = normalize_email(email);
    validation::validate_email(&email)?;
    validation::validate_password(password)?;

    let display_name = match display_name {
        Some(name) => {
            validation::validate_display_name(name)?;
            name.trim().to_string()
        }
        None => validation::default_display_name(&email),
    };

    if user_repo::email_exists(pool, &email).await? {
        return Err(ApiError::Conflict(
            "An account with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(password.to_string(), bcrypt_cost).await?;

    match user_repo::create_user(pool, &email, &display_name, &password_hash).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "User registered");
            Ok(user)
        }
        // Lost a race with a concurrent registration.
        Err(sqlx::Error::Database(db_err))
            if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
        {
            Err(ApiError::Conflict(
                "An account with this email already exists".to_string(),
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// Check credentials. Unknown emails and wrong passwords are indistinguishable.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<UserCredentials, ApiError> {
    let email = normalize_email(email);
    let invalid = || ApiError::Auth("Invalid email or password".to_string());

    let credentials = user_repo::find_credentials_by_email(pool, &email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(password.to_string(), credentials.password_hash.clone()).await? {
        tracing::debug!(user_id = %credentials.id, "Password mismatch");
        return Err(invalid());
    }

    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hash = hash_password("password123".to_string(), 4).await.unwrap();
        assert_ne!(hash, "password123");

        assert!(verify_password("password123".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("password124".to_string(), hash).await.unwrap());
    }
}
