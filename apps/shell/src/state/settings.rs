//! # Settings State

use std::sync::{Arc, Mutex, PoisonError};

use stump_core::types::Settings;
use stump_store::{FileStore, KeyValueStore, SettingsStore};

/// Shared handle to the [`SettingsStore`].
#[derive(Debug)]
pub struct SettingsState<S: KeyValueStore = FileStore> {
    settings: Arc<Mutex<SettingsStore<S>>>,
}

impl<S: KeyValueStore> SettingsState<S> {
    pub fn new(backend: S) -> Self {
        SettingsState {
            settings: Arc::new(Mutex::new(SettingsStore::open(backend))),
        }
    }

    /// Copy of the current settings, for commands that price a quote.
    pub fn current(&self) -> Settings {
        self.with_settings(|s| s.settings().clone())
    }

    pub fn with_settings<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SettingsStore<S>) -> R,
    {
        let settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        f(&settings)
    }

    pub fn with_settings_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SettingsStore<S>) -> R,
    {
        let mut settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut settings)
    }
}

impl<S: KeyValueStore> Clone for SettingsState<S> {
    fn clone(&self) -> Self {
        SettingsState {
            settings: Arc::clone(&self.settings),
        }
    }
}
