//! # Storage Error Types
//!
//! Error types for slot reads and writes.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / quota                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds slot context                          │
//! │       │                                                                 │
//! │       ├──► save(): returned to the caller for observability            │
//! │       │                                                                 │
//! │       └──► mutations: logged with tracing::warn!, remembered as        │
//! │            last_save_error(), never propagated                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Data directory missing and cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on slot '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot could not be serialized.
    #[error("Serialization failed for slot '{slot}': {source}")]
    Serialization {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refused the write because it would exceed its quota.
    #[error("Storage quota exceeded writing '{slot}': {needed} bytes needed, {available} available")]
    QuotaExceeded {
        slot: String,
        needed: usize,
        available: usize,
    },

    /// Slot names must be plain file-name-safe identifiers.
    #[error("Invalid slot name: '{0}'")]
    InvalidKey(String),
}

impl StoreError {
    /// Creates an Io error for a slot.
    pub fn io(slot: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            slot: slot.into(),
            source,
        }
    }

    /// Creates a Serialization error for a slot.
    pub fn serialization(slot: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            slot: slot.into(),
            source,
        }
    }

    /// Whether the failure is the backend running out of room.
    pub fn is_quota(&self) -> bool {
        matches!(self, StoreError::QuotaExceeded { .. })
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::QuotaExceeded {
            slot: "stumpcalc_job_v1".to_string(),
            needed: 120,
            available: 100,
        };
        assert_eq!(
            err.to_string(),
            "Storage quota exceeded writing 'stumpcalc_job_v1': 120 bytes needed, 100 available"
        );
        assert!(err.is_quota());

        let err = StoreError::io(
            "stumpcalc_settings_v1",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on slot 'stumpcalc_settings_v1': denied");
        assert!(!err.is_quota());
    }
}
