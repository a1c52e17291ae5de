use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cq_exercises::ProgressionError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Locked(String),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) | Self::Jwt(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Locked(_) => StatusCode::LOCKED,
            Self::Database(_) | Self::Bcrypt(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ProgressionError> for ApiError {
    fn from(err: ProgressionError) -> Self {
        match err {
            ProgressionError::UnknownTopic(_)
            | ProgressionError::UnknownLevel(_)
            | ProgressionError::NotFound { .. }
            | ProgressionError::OutOfRange { .. } => Self::NotFound(err.to_string()),
            ProgressionError::InvalidLevelKey(_) => Self::Validation(err.to_string()),
            ProgressionError::Locked(_) => Self::Locked(err.to_string()),
            ProgressionError::SolutionHidden(_) => Self::Forbidden(err.to_string()),
            ProgressionError::Store(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures are logged in full and reported generically.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cq_exercises::{Level, Topic};

    #[test]
    fn test_progression_errors_map_to_statuses() {
        let cases = [
            (ProgressionError::Locked(2), StatusCode::LOCKED),
            (ProgressionError::SolutionHidden(1), StatusCode::FORBIDDEN),
            (
                ProgressionError::OutOfRange { index: 9, len: 4 },
                StatusCode::NOT_FOUND,
            ),
            (
                ProgressionError::NotFound {
                    topic: Topic::Html,
                    level: Level::Advanced,
                },
                StatusCode::NOT_FOUND,
            ),
            (
                ProgressionError::UnknownTopic("cobol".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ProgressionError::InvalidLevelKey("beginner".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProgressionError::Store("offline".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_leaked() {
        use http_body_util::BodyExt;

        let response =
            ApiError::Internal("connection refused at 10.0.0.3".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
