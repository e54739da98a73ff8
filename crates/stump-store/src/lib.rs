//! # stump-store: Persistence Layer for StumpCalc
//!
//! This crate keeps the draft quote and the pricing settings across app
//! restarts. Each lives in its own key-value slot as a JSON snapshot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StumpCalc Data Flow                              │
//! │                                                                         │
//! │  Shell command (update_stump)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stump-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Repositories │    │    Repair     │    │   Backends   │  │   │
//! │  │   │               │    │  (repair.rs)  │    │ (backend.rs) │  │   │
//! │  │   │ DraftStore    │───►│ field-by-field│    │ FileStore    │  │   │
//! │  │   │ SettingsStore │    │ defaults      │    │ MemoryStore  │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────▲───────┘  │   │
//! │  │           └────────────── get / set ────────────────┘          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data dir>/stumpcalc_job_v1.json                              │   │
//! │  │   <data dir>/stumpcalc_settings_v1.json                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - The `KeyValueStore` seam and its file/memory backends
//! - [`repair`] - Coercion of persisted JSON back into domain types
//! - [`repository`] - `DraftStore` and `SettingsStore`
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use stump_core::types::StumpPatch;
//! use stump_store::{DraftStore, MemoryStore};
//!
//! let mut drafts = DraftStore::open(MemoryStore::new());
//! let id = drafts.add_stump();
//! drafts.update_stump(&id, StumpPatch { diameter: Some(16.0), ..Default::default() });
//!
//! assert_eq!(drafts.job().stumps.len(), 2);
//! assert!(drafts.last_save_error().is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod repair;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::{StoreError, StoreResult};

// Repository re-exports for convenience
pub use repository::draft::DraftStore;
pub use repository::settings::SettingsStore;

/// Slot holding the draft job (photos stripped).
pub const JOB_SLOT: &str = "stumpcalc_job_v1";

/// Slot holding the pricing settings.
pub const SETTINGS_SLOT: &str = "stumpcalc_settings_v1";
