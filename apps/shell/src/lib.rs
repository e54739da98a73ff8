//! # StumpCalc Shell
//!
//! The host layer a UI binds to: configuration, logging, shared state and
//! commands. Business logic lives in `stump-core`; persistence in
//! `stump-store`.
//!
//! ## Module Organization
//! ```text
//! stumpcalc_shell/
//! ├── lib.rs          ◄─── You are here (startup: tracing + AppState)
//! ├── config.rs       ◄─── AppConfig from the environment
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── draft.rs    ◄─── DraftState (draft store behind a Mutex)
//! │   └── settings.rs ◄─── SettingsState
//! ├── commands/
//! │   ├── job.rs      ◄─── get_quote, update_job, reset_job, save_draft
//! │   ├── stump.rs    ◄─── stump + photo commands
//! │   ├── settings.rs ◄─── get_settings, update_settings
//! │   └── quote.rs    ◄─── quote_text, email_link, share_quote
//! ├── share.rs        ◄─── ShareTarget + clipboard fallback
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use stumpcalc_shell::config::AppConfig;
//! use stumpcalc_shell::{commands, init_tracing, AppState};
//!
//! let config = AppConfig::from_env().unwrap();
//! init_tracing(&config);
//! let app = AppState::open(&config);
//!
//! let view = commands::job::get_quote(&app.drafts, &app.settings);
//! println!("{} stumps, total {}", view.job.stumps.len(), view.totals.total);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod share;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use state::{DraftState, SettingsState};
use stump_store::FileStore;

/// Both stores, opened over the same data directory.
#[derive(Debug, Clone)]
pub struct AppState {
    pub drafts: DraftState<FileStore>,
    pub settings: SettingsState<FileStore>,
}

impl AppState {
    /// Opens the stores.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. FileStore at config.data_dir (created on first save)                │
    /// │  2. SettingsStore::open → saved settings merged over defaults           │
    /// │  3. DraftStore::open    → saved draft repaired, or a fresh job          │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Never fails: unreadable or corrupt slots fall back to defaults.
    pub fn open(config: &AppConfig) -> Self {
        info!(data_dir = %config.data_dir.display(), "Opening StumpCalc stores");

        let settings = SettingsState::new(FileStore::new(&config.data_dir));
        let drafts = DraftState::new(FileStore::new(&config.data_dir));

        drafts.with_drafts(|d| {
            info!(
                job_id = %d.job().id,
                stumps = d.job().stumps.len(),
                "Draft ready"
            );
        });

        AppState { drafts, settings }
    }
}

/// Installs the global tracing subscriber.
///
/// ## Log Levels
/// - `STUMPCALC_LOG=debug` - Show debug messages
/// - `RUST_LOG=stump_store=trace` - Used when `STUMPCALC_LOG` is unset
/// - Default: [`config::DEFAULT_LOG_FILTER`]
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(config: &AppConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
