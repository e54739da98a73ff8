//! # Repository Module
//!
//! Stores for the two things StumpCalc remembers between sessions.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Shell command                                                          │
//! │       │                                                                 │
//! │       │  drafts.update_stump(&id, patch)                                │
//! │       ▼                                                                 │
//! │  DraftStore<S>                                                          │
//! │  ├── job(&self)              in-memory draft, source of truth           │
//! │  ├── update_* / add_* / remove_*                                        │
//! │  └── save(&mut self)         snapshot → JSON → slot                     │
//! │       │                                                                 │
//! │       │  S::set("stumpcalc_job_v1", json)                               │
//! │       ▼                                                                 │
//! │  KeyValueStore (FileStore / MemoryStore)                                │
//! │                                                                         │
//! │  Every mutation saves. A failed save is logged and remembered;          │
//! │  the in-memory value is never rolled back.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`DraftStore`](draft::DraftStore) - The draft job and its stumps
//! - [`SettingsStore`](settings::SettingsStore) - Pricing and company settings

pub mod draft;
pub mod settings;
