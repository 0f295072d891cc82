//! JSON error responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::error::Error;

/// An error rendered as a JSON body with an HTTP status
#[derive(Debug, Clone, PartialEq)]
pub struct AppError {
    pub status: StatusCode,
    pub body: Value,
}

impl AppError {
    /// Arbitrary status and body
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// `{"error": message}` with the given status
    pub fn message(status: StatusCode, message: &str) -> Self {
        Self::new(status, json!({ "error": message }))
    }

    /// 401 for requests without a usable bearer token
    pub fn missing_token() -> Self {
        Self::message(StatusCode::UNAUTHORIZED, "No token provided")
    }

    /// 500 with `{"error": message, "details": err}`
    pub fn with_details(message: &str, err: &Error) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": message, "details": err.to_string() }),
        )
    }

    /// 404 for unmatched routes
    pub fn not_found(uri: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            json!({ "error": "Not Found", "message": format!("Route {} not found", uri) }),
        )
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        log::error!("Unhandled error: {}", err);
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Something went wrong!", "message": err.to_string() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_missing_token_body() {
        let err = AppError::missing_token();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.body, json!({ "error": "No token provided" }));
    }

    #[test]
    fn test_with_details_includes_cause() {
        let cause: Error = ApiError::Network("Connection refused".to_string()).into();
        let err = AppError::with_details("Failed to fetch organization data", &cause);

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body["error"], "Failed to fetch organization data");
        assert!(err.body["details"].as_str().unwrap().contains("Connection refused"));
    }

    #[test]
    fn test_uncaught_error_uses_generic_message() {
        let err = AppError::from(Error::InvalidBody("expected value".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body["error"], "Something went wrong!");
        assert!(err.body["message"].as_str().unwrap().contains("expected value"));
    }

    #[test]
    fn test_not_found_mentions_route() {
        let err = AppError::not_found("/nope");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body["message"], "Route /nope not found");
    }
}
