use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::UseCaseError;

/// API error response, rendered in the same envelope as successful ones
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.message,
            "data": null,
        }));

        (self.status, body).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::InvalidRequest(msg) => ApiError::bad_request(msg),
            UseCaseError::Token(e) => ApiError::bad_request(format!("Invalid token: {}", e)),
            UseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            UseCaseError::NotFound(msg) => ApiError::not_found(format!("Not found: {}", msg)),
            UseCaseError::Repository(e) => {
                tracing::error!(error = %e, "repository failure");
                ApiError::internal_error("Failed to run database operation")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_use_case_error_mapping() {
        let cases = vec![
            (
                UseCaseError::InvalidRequest("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                UseCaseError::Domain(DomainError::EmptyName),
                StatusCode::BAD_REQUEST,
            ),
            (UseCaseError::NotFound("news 1".into()), StatusCode::NOT_FOUND),
            (
                UseCaseError::Repository(RepositoryError::Internal("db".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_repository_details_are_not_exposed() {
        let err = ApiError::from(UseCaseError::Repository(RepositoryError::Internal(
            "password=secret".into(),
        )));
        assert!(!err.message().contains("secret"));
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = ApiError::not_found("Not found: news 3").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Not found: news 3");
        assert!(json["data"].is_null());
    }
}
