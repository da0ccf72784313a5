//! API error types and responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use taxonomy_core::TaxonomyError;
use thiserror::Error;
use tracing::{error, warn};

use crate::storage::StorageError;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Rejected(#[from] TaxonomyError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Rejected(err @ TaxonomyError::DuplicateCategory { category }) => {
                warn!(category = %category, "Category already holds every requested subtype");
                (StatusCode::BAD_REQUEST, "DUPLICATE_CATEGORY", err.to_string())
            }
            ApiError::Rejected(err @ TaxonomyError::EmptyCategoryName) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", err.to_string())
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Rejected(rejection) => ApiError::Rejected(rejection),
            StorageError::LockPoisoned(msg) => ApiError::Internal(format!("Registry lock poisoned: {}", msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_maps_to_bad_request() {
        let err: ApiError = TaxonomyError::DuplicateCategory {
            category: "Billing".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_name_maps_to_bad_request() {
        let err: ApiError = StorageError::Rejected(TaxonomyError::EmptyCategoryName).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_poisoned_lock_maps_to_internal() {
        let err: ApiError = StorageError::LockPoisoned("boom".into()).into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
