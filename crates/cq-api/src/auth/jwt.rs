use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

/// Issue an HS256 session token valid for `expiry_hours`.
pub fn generate_jwt_token(
    user_id: Uuid,
    email: &str,
    jwt_secret: &str,
    expiry_hours: i64,
) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(expiry_hours)).timestamp() as usize,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn verify_jwt_token(token: &str, jwt_secret: &str) -> Result<Claims, ApiError> {
    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Auth("Invalid or expired token".to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_jwt_secret_minimum_32_characters_long";

    #[test]
    fn test_generate_and_verify_jwt_token() {
        let user_id = Uuid::new_v4();

        let token = generate_jwt_token(user_id, "learner@example.com", SECRET, 24)
            .expect("Failed to generate token");
        let claims = verify_jwt_token(&token, SECRET).expect("Failed to verify token");

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "learner@example.com");

        let lifetime = claims.exp - claims.iat;
        assert!(
            (86_390..=86_410).contains(&lifetime),
            "Token should expire in about 24 hours, got {lifetime} seconds"
        );
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = generate_jwt_token(Uuid::new_v4(), "a@example.com", SECRET, 1).unwrap();

        let result = verify_jwt_token(&token, "wrong_jwt_secret_minimum_32_characters_long");
        assert!(matches!(result, Err(ApiError::Auth(msg)) if msg.contains("Invalid or expired")));
    }

    #[test]
    fn test_verify_expired_token() {
        // Well past the default 60 second leeway.
        let token = generate_jwt_token(Uuid::new_v4(), "a@example.com", SECRET, -2).unwrap();
        assert!(verify_jwt_token(&token, SECRET).is_err());
    }

    #[test]
    fn test_verify_garbage_token() {
        assert!(verify_jwt_token("invalid.jwt.token", SECRET).is_err());
    }
}
