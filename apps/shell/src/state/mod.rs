//! # State Module
//!
//! Shared, lock-guarded handles to the two stores.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppState::open(&config)                    │   │
//! │  │  FileStore::new(config.data_dir)  (one per store)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                          │
//! │               ▼                             ▼                           │
//! │  ┌────────────────────────┐    ┌────────────────────────┐              │
//! │  │      DraftState        │    │     SettingsState      │              │
//! │  │                        │    │                        │              │
//! │  │  Arc<Mutex<            │    │  Arc<Mutex<            │              │
//! │  │    DraftStore<S>>>     │    │    SettingsStore<S>>>  │              │
//! │  └────────────────────────┘    └────────────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Each store behind its own Mutex; commands lock one at a time         │
//! │  • A poisoned lock is recovered; the store data is still consistent     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod draft;
mod settings;

pub use draft::DraftState;
pub use settings::SettingsState;
