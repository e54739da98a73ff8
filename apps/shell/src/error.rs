//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in StumpCalc                              │
//! │                                                                         │
//! │  UI                          Rust Shell                                 │
//! │  ──                          ──────────                                 │
//! │                                                                         │
//! │  invoke('update_stump')                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ───── CoreError::StumpNotFound ────────┐            │  │
//! │  │         │                                           │            │  │
//! │  │         ▼                                           ▼            │  │
//! │  │  Incomplete quote? ── ValidationError ──────────── ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Save failures are NOT command errors: the store logs them and the      │
//! │  edit stands. They surface through `saveError` on the quote view.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stump_core::{CoreError, ValidationError};
use stump_store::StoreError;

use crate::share::ShareError;

/// API error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Stump not found: 3f2a..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Stump or photo not found
    NotFound,

    /// Input or quote validation failed
    ValidationError,

    /// Reading or writing a slot failed
    StorageError,

    /// Neither the share sheet nor the clipboard took the quote
    ShareError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::StumpNotFound(id) => ApiError::not_found("Stump", &id),
            CoreError::PhotoNotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::PhotoLimitReached { .. } | CoreError::LastStump => {
                ApiError::validation(err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts storage errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::QuotaExceeded { .. } => {
                ApiError::new(ErrorCode::StorageError, "Device storage is full; changes were not saved")
            }
            StoreError::InvalidKey(_) => {
                tracing::error!("Invalid storage slot: {}", err);
                ApiError::internal("Storage is misconfigured")
            }
            StoreError::Io { .. } | StoreError::Serialization { .. } => {
                tracing::error!("Storage operation failed: {}", err);
                ApiError::new(ErrorCode::StorageError, "Saving the quote failed")
            }
        }
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        ApiError::new(ErrorCode::ShareError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::StumpNotFound("s1".into()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Stump not found: s1");

        let err = ApiError::from(CoreError::LastStump);
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ApiError::from(CoreError::from(ValidationError::IncompleteStumps { missing: 1 }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.ends_with("1 missing."));
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::QuotaExceeded {
            slot: "stumpcalc_job_v1".into(),
            needed: 10,
            available: 1,
        });
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Photo", "p1")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Photo not found: p1");
    }
}
