//! # Commands Module
//!
//! Everything a UI can ask the shell to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── job.rs       ◄─── Quote view, job metadata, reset
//! ├── stump.rs     ◄─── Stump add/edit/remove, photos
//! ├── settings.rs  ◄─── Pricing settings
//! └── quote.rs     ◄─── Quote text, email link, share
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event (diameter field changed)                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::stump::update_stump(                                         │
//! │      &drafts,      ◄── DraftState                                       │
//! │      &settings,    ◄── SettingsState (read for pricing)                 │
//! │      stump_id,                                                          │
//! │      patch,        ◄── StumpPatch from the form                         │
//! │  ) -> Result<QuoteView, ApiError>                                       │
//! │         │                                                               │
//! │         │ (serde_json)                                                  │
//! │         ▼                                                               │
//! │  UI re-renders from the returned QuoteView                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs. Commands that change the
//! draft return a fresh [`QuoteView`](job::QuoteView) so totals and
//! validity never go stale.

pub mod job;
pub mod quote;
pub mod settings;
pub mod stump;
