//! API error types with IntoResponse
//!
//! Every failure leaves the router as `{"success": false, "error": ...}`.
//! Store and configuration causes are logged, never returned.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// Methods the files endpoint answers, as sent in `Allow`
pub const ALLOWED_METHODS: &str = "GET, POST, DELETE";

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Connection string missing (500, logged)
    Configuration { variable: &'static str },

    /// Request failed validation (400)
    Validation(ValidationError),

    /// No file with the requested id (404)
    NotFound,

    /// Store connectivity or query failure (500, logged)
    Store(StoreError),

    /// Method outside GET/POST/DELETE/OPTIONS (405)
    MethodNotAllowed(Method),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Configuration { .. } | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            Self::Configuration { variable } => {
                tracing::error!("Configuration error: {} is not set", variable);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            Self::Validation(e) => e.to_string(),
            Self::NotFound => "File not found".to_string(),
            Self::MethodNotAllowed(method) => format!("Method {} not allowed", method),
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        if let Self::MethodNotAllowed(_) = self {
            return (status, [(header::ALLOW, ALLOWED_METHODS)], body).into_response();
        }

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Configuration { variable } => Self::Configuration { variable },
            _ => Self::Store(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_message() {
        let response = ApiError::from(ValidationError::MissingFields).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "File not found");
    }

    #[tokio::test]
    async fn configuration_error_is_generic_500() {
        let err = ApiError::from(StoreError::Configuration {
            variable: "DATABASE_URL",
        });
        assert!(matches!(err, ApiError::Configuration { .. }));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("DATABASE_URL"));
    }

    #[tokio::test]
    async fn store_error_hides_details() {
        let err = ApiError::from(StoreError::Query(sqlx::Error::RowNotFound));
        assert!(matches!(err, ApiError::Store(_)));

        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn method_not_allowed_sets_allow_header() {
        let response = ApiError::MethodNotAllowed(Method::PATCH).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::ALLOW).unwrap(),
            "GET, POST, DELETE"
        );
        assert_eq!(body_json(response).await["error"], "Method PATCH not allowed");
    }
}
