//! # Error Types
//!
//! Domain-specific error types for stump-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stump-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Draft not ready to send                        │
//! │                                                                         │
//! │  stump-store errors (separate crate)                                   │
//! │  └── StoreError       - Slot read/write failures                       │
//! │                                                                         │
//! │  Shell errors (in app)                                                 │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing and formatting never fail. These errors exist for the operations
//! layered on top: looking up a stump by id, checking a draft before it is
//! shared.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Stump id is not part of the current draft.
    #[error("Stump not found: {0}")]
    StumpNotFound(String),

    /// Photo id is not attached to the given stump.
    #[error("Photo {photo_id} not found on stump {stump_id}")]
    PhotoNotFound { stump_id: String, photo_id: String },

    /// The stump already holds the maximum number of photos.
    #[error("Stump {stump_id} already has {max} photos")]
    PhotoLimitReached { stump_id: String, max: usize },

    /// The last stump of a draft cannot be removed.
    #[error("A quote needs at least one stump")]
    LastStump,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These never block editing. They are raised when a draft is about to leave
/// the app (share, email) and is not complete.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more stumps are missing a diameter or count.
    #[error("Enter diameter and count for all stumps to get a valid quote. {missing} missing.")]
    IncompleteStumps { missing: usize },

    /// The draft has no stumps at all.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Unit Tests
// =============================================================================
