//! # Validation Module
//!
//! Checks layered on top of the always-defined pricing.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Editing (never blocks)                                       │
//! │  ├── Any diameter/count is accepted and priced                         │
//! │  └── Invalid stumps price at zero (or as one stump)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Leaving the app (THIS MODULE)                                │
//! │  ├── Share / email / export require every stump to be complete         │
//! │  └── Settings edits must keep rates in range                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Load-time repair (stump-store)                               │
//! │  └── Corrupt persisted fields fall back to defaults                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Job, Stump};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest tax rate accepted (100%).
pub const MAX_TAX_RATE: f64 = 1.0;

/// Highest per-inch rate accepted.
pub const MAX_BASE_RATE: f64 = 1_000.0;

// =============================================================================
// Stump Validators
// =============================================================================

/// Whether a stump has what a final quote needs: a positive diameter and a
/// positive count.
///
/// ## Example
/// ```rust
/// use stump_core::types::Stump;
/// use stump_core::validation::stump_is_valid;
///
/// let mut stump = Stump::numbered(1);
/// assert!(!stump_is_valid(&stump)); // diameter still 0
/// stump.diameter = 14.0;
/// assert!(stump_is_valid(&stump));
/// ```
pub fn stump_is_valid(stump: &Stump) -> bool {
    stump.diameter.is_finite() && stump.diameter > 0.0 && stump.count > 0
}

/// Number of stumps still missing a diameter or count.
pub fn invalid_stump_count(job: &Job) -> usize {
    job.stumps.iter().filter(|s| !stump_is_valid(s)).count()
}

/// Checks that a draft can be shared as a final quote.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Share / Email button                                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  ensure_quote_ready(job) ← THIS FUNCTION                                │
/// │       │                                                                 │
/// │       ├── no stumps? → Error: "stumps is required"                      │
/// │       │                                                                 │
/// │       ├── 2 incomplete? → Error: "... 2 missing."                       │
/// │       │                                                                 │
/// │       └── OK → build quote text                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn ensure_quote_ready(job: &Job) -> ValidationResult<()> {
    if job.stumps.is_empty() {
        return Err(ValidationError::Required {
            field: "stumps".to_string(),
        });
    }

    let missing = invalid_stump_count(job);
    if missing > 0 {
        return Err(ValidationError::IncompleteStumps { missing });
    }

    Ok(())
}

// =============================================================================
// Settings Validators
// =============================================================================

/// Validates a per-inch base rate: between 0 and [`MAX_BASE_RATE`].
pub fn validate_base_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || !(0.0..=MAX_BASE_RATE).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "baseRatePerInch".to_string(),
            min: 0.0,
            max: MAX_BASE_RATE,
        });
    }

    Ok(())
}

/// Validates a tax rate fraction: between 0 and [`MAX_TAX_RATE`].
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || !(0.0..=MAX_TAX_RATE).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "taxRate".to_string(),
            min: 0.0,
            max: MAX_TAX_RATE,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
