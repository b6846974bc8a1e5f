use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::db::failure::StorageFailure;

/// Which operation a storage failure happened under; the same failure
/// category maps to different statuses and messages depending on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureScope {
    CategoryCreate,
    CategoryUpdate,
    ProductCreate,
    ProductUpdate,
    General,
}

/// Client-facing error. The Display string is the wire message; every
/// response body is `{"error": <message>}`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,
    #[error("{0}")]
    Unprocessable(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    Busy(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    StorageFull(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The normalization table: storage failure category + operation
    /// scope → HTTP error. `fallback` is the operation-specific 500
    /// message used for unclassified failures.
    pub fn from_storage(failure: StorageFailure, scope: FailureScope, fallback: &str) -> Self {
        match failure {
            StorageFailure::Uniqueness => match scope {
                FailureScope::CategoryCreate | FailureScope::CategoryUpdate => {
                    ApiError::Conflict("Category already exists".to_string())
                }
                _ => ApiError::Conflict("Resource conflict".to_string()),
            },
            StorageFailure::ForeignKey => match scope {
                FailureScope::CategoryUpdate => ApiError::Conflict(
                    "Cannot rename category while products reference it".to_string(),
                ),
                FailureScope::ProductCreate | FailureScope::ProductUpdate => {
                    ApiError::Unprocessable("categoryName does not exist".to_string())
                }
                _ => ApiError::Conflict("Referential integrity conflict".to_string()),
            },
            StorageFailure::CheckConstraint => match scope {
                FailureScope::CategoryUpdate => {
                    ApiError::Unprocessable("Validation failed for category update".to_string())
                }
                FailureScope::ProductCreate => {
                    ApiError::Unprocessable("Validation failed for product creation".to_string())
                }
                FailureScope::ProductUpdate => {
                    ApiError::Unprocessable("Validation failed for product update".to_string())
                }
                _ => ApiError::Unprocessable("Validation failed".to_string()),
            },
            StorageFailure::Busy => ApiError::Busy("Database is busy, please retry".to_string()),
            StorageFailure::Full => ApiError::StorageFull("Database is full".to_string()),
            StorageFailure::ReadOnly => {
                ApiError::Unavailable("Database is read-only".to_string())
            }
            StorageFailure::Range => {
                ApiError::BadRequest("Invalid query parameters".to_string())
            }
            StorageFailure::Mismatch => ApiError::BadRequest("Invalid data type".to_string()),
            StorageFailure::TooLarge => {
                ApiError::PayloadTooLarge("Payload too large".to_string())
            }
            StorageFailure::Permission => {
                ApiError::Unavailable("Database unavailable".to_string())
            }
            StorageFailure::Unknown(detail) => {
                log::error!("unclassified storage error: {detail}");
                ApiError::Internal(fallback.to_string())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Busy(_) | ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::StorageFull(_) => StatusCode::INSUFFICIENT_STORAGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let ApiError::Busy(_) = self {
            builder.insert_header(("Retry-After", "1"));
        }
        builder.json(json!({ "error": self.to_string() }))
    }
}
