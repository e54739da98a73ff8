//! # stump-core: Pure Quoting Logic for StumpCalc
//!
//! This crate is the **heart** of StumpCalc. It contains the pricing formula,
//! the domain types and the quote text layout as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StumpCalc Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (quote form)                        │   │
//! │  │    Client details ──► Stump cards ──► Summary ──► Share bar     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/shell (commands)                        │   │
//! │  │    update_stump, add_stump, quote_text, share_quote, etc.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stump-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   quote   │  │ validation│  │   │
//! │  │   │   Job     │  │ line total│  │   lines   │  │  validity │  │   │
//! │  │   │  Stump    │  │  totals   │  │  mailto   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stump-store (Persistence Layer)                  │   │
//! │  │           Draft slot, settings slot, repair-on-load             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Settings, Job, Stump, Photo, patches)
//! - [`pricing`] - Line totals and quote totals
//! - [`money`] - Cent rounding and currency display
//! - [`quote`] - Canonical quote text and the share/email projections
//! - [`validation`] - Whether a draft is complete enough to send
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Always Defined**: Pricing never fails and never yields NaN, even for a
//!    half-filled form
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stump_core::pricing::calculate_quote;
//! use stump_core::types::{Job, Settings, StumpPatch};
//!
//! let settings = Settings::default(); // $5/inch, 13% HST
//! let mut job = Job::new();
//! job.stumps[0].apply(StumpPatch { diameter: Some(10.0), ..Default::default() });
//!
//! let totals = calculate_quote(&job, &settings);
//! assert_eq!(totals.subtotal, 50.0);
//! assert!((totals.total - 56.5).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod quote;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stump_core::Job` instead of
// `use stump_core::types::Job`

pub use error::{CoreError, ValidationError};
pub use money::{format_currency, Money};
pub use pricing::{calculate_quote, stump_line_total};
pub use quote::quote_lines;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum photos attached to a single stump.
///
/// ## Business Reason
/// Photos are embedded image payloads kept in memory for the session.
/// Three per stump is enough to show the crew the site.
pub const MAX_PHOTOS_PER_STUMP: usize = 3;

/// Surcharge fraction added for a complex stump (roots, rocks, hardwood).
pub const COMPLEX_SURCHARGE: f64 = 0.2;

/// Surcharge fraction added for tight access (gates, slopes, fences).
pub const TIGHT_ACCESS_SURCHARGE: f64 = 0.1;

/// Company name used until the user sets their own.
pub const DEFAULT_COMPANY_NAME: &str = "Forest City Stump Works";
