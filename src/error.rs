// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::validation::Violation;

/// Classified API failure with appropriate status codes and client-friendly
/// messages. Every failure reaching the transport boundary resolves to exactly
/// one of these variants; anything unclassified becomes `Internal` so raw
/// error text never leaks to the caller.
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthenticated(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict (e.g. duplicate email on registration)
    Conflict(String),

    // 422 Unprocessable Entity, carrying the full violation list
    InvalidInput {
        message: String,
        violations: Vec<Violation>,
    },

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthenticated(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InvalidInput { .. } => 422,
            ApiError::Internal(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthenticated(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InvalidInput { message, .. } => message,
            ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to the wire payload: { message, code, data? } where `data`
    /// lists field violations for invalid input.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::InvalidInput { message, violations } => json!({
                "message": message,
                "code": self.status_code(),
                "data": violations,
            }),
            _ => json!({
                "message": self.message(),
                "code": self.status_code(),
            }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        ApiError::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn invalid_input(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        ApiError::InvalidInput {
            message: message.into(),
            violations,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

// Convert storage failures to classified API errors
impl From<crate::store::StoreError> for ApiError {
    fn from(err: crate::store::StoreError) -> Self {
        match err {
            crate::store::StoreError::Duplicate(key) => {
                ApiError::conflict(format!("{} already exists", key))
            }
            crate::store::StoreError::NotFound(what) => {
                ApiError::not_found(format!("{} not found", what))
            }
            crate::store::StoreError::Backend(msg) => {
                // Log the real error but return a generic message
                tracing::error!("Storage backend error: {}", msg);
                ApiError::internal("An error occurred while processing your request")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn taxonomy_maps_to_stable_status_codes() {
        assert_eq!(ApiError::unauthenticated("x").status_code(), 401);
        assert_eq!(ApiError::forbidden("x").status_code(), 403);
        assert_eq!(ApiError::not_found("x").status_code(), 404);
        assert_eq!(ApiError::conflict("x").status_code(), 409);
        assert_eq!(ApiError::invalid_input("x", vec![]).status_code(), 422);
        assert_eq!(ApiError::internal("x").status_code(), 500);
    }

    #[test]
    fn invalid_input_payload_carries_violations() {
        let err = ApiError::invalid_input(
            "Invalid input",
            vec![Violation::new("email", "Email is invalid")],
        );
        let body = err.to_json();
        assert_eq!(body["code"], 422);
        assert_eq!(body["data"][0]["field"], "email");
    }

    #[test]
    fn other_variants_omit_data() {
        let body = ApiError::forbidden("Not authorized").to_json();
        assert_eq!(body["code"], 403);
        assert_eq!(body["message"], "Not authorized");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn backend_failures_classify_as_internal_without_detail() {
        let err: ApiError = StoreError::Backend("connection reset by peer".into()).into();
        assert_eq!(err.status_code(), 500);
        assert!(!err.message().contains("connection reset"));
    }

    #[test]
    fn duplicate_key_classifies_as_conflict() {
        let err: ApiError = StoreError::Duplicate("User".into()).into();
        assert_eq!(err.status_code(), 409);
    }
}
