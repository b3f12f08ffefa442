//! Unified error handling for the webhook endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the HTTP handlers.
///
/// Slack delivery failures are not represented here: they happen after the
/// webhook was acknowledged and are only logged.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request signature missing, stale or wrong.
    #[error("Request signature verification failed")]
    Unverified,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // No body: a failed verification must not tell the caller why
            Self::Unverified => StatusCode::NOT_FOUND.into_response(),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            Self::Internal(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("missing trigger_id".to_string());
        assert_eq!(err.to_string(), "Bad request: missing trigger_id");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(AppError::Unverified), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unverified_has_empty_body() {
        let body = body_string(AppError::Unverified.into_response()).await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let error = AppError::Internal("System clock is before the Unix epoch".to_string());
        let body = body_string(error.into_response()).await;
        assert_eq!(body, "Internal server error");
    }
}
