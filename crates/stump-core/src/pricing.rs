//! # Pricing Engine
//!
//! The quote formula. Two pure functions, no state.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line total = diameter × base rate × max(count, 1) × multiplier         │
//! │                                                                         │
//! │  multiplier = 1 + 0.2 (complex) + 0.1 (tight access)                    │
//! │               surcharges ADD, they do not compound: both = 1.3          │
//! │                                                                         │
//! │  subtotal   = Σ line totals          (every stump, valid or not)        │
//! │  tax        = subtotal × tax rate    (0 when tax is disabled)           │
//! │  total      = subtotal + tax                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A half-filled form still has to show a number, so nothing here rejects
//! input: a zero count prices as one stump, and anything that would come out
//! NaN, infinite or negative prices as zero. Whether a draft is complete
//! enough to send is [`crate::validation`]'s call.

use crate::types::{Job, QuoteTotals, Settings, Stump};
use crate::{COMPLEX_SURCHARGE, TIGHT_ACCESS_SURCHARGE};

/// Surcharge multiplier for a stump (1.0, 1.1, 1.2 or 1.3).
pub fn surcharge_multiplier(stump: &Stump) -> f64 {
    let complexity = if stump.is_complex { COMPLEX_SURCHARGE } else { 0.0 };
    let access = if stump.is_tight_access { TIGHT_ACCESS_SURCHARGE } else { 0.0 };
    1.0 + complexity + access
}

/// Price for one stump entry, always finite and non-negative.
///
/// ## Example
/// ```rust
/// use stump_core::pricing::stump_line_total;
/// use stump_core::types::{Settings, Stump};
///
/// let settings = Settings::default(); // $5/inch
/// let mut stump = Stump::numbered(1);
/// stump.diameter = 10.0;
/// stump.count = 2;
/// stump.is_complex = true;
/// stump.is_tight_access = true;
///
/// // 10 × 5 × 2 × 1.3
/// assert!((stump_line_total(&stump, &settings) - 130.0).abs() < 1e-9);
/// ```
pub fn stump_line_total(stump: &Stump, settings: &Settings) -> f64 {
    let count = stump.count.max(1) as f64;
    let base = stump.diameter * settings.base_rate_per_inch * count;
    let total = base * surcharge_multiplier(stump);

    if total.is_finite() && total > 0.0 {
        total
    } else {
        0.0
    }
}

/// Subtotal, tax and total for a job.
///
/// Every stump contributes, including ones still missing a diameter (they
/// contribute zero). Tax is applied once to the subtotal. A sum that
/// overflows to infinity is reported as zero, like a single line would be.
pub fn calculate_quote(job: &Job, settings: &Settings) -> QuoteTotals {
    let subtotal = finite_or_zero(
        job.stumps
            .iter()
            .map(|stump| stump_line_total(stump, settings))
            .sum(),
    );

    let tax_amount = if settings.tax_enabled {
        finite_or_zero(subtotal * settings.tax_rate)
    } else {
        0.0
    };

    QuoteTotals {
        subtotal,
        tax_amount,
        total: finite_or_zero(subtotal + tax_amount),
    }
}

fn finite_or_zero(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
