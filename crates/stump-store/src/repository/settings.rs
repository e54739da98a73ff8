//! # Settings Repository
//!
//! Pricing and company settings. Loaded by merging whatever was saved over
//! the defaults; saved as the full record.

use serde_json::Value;
use tracing::{debug, warn};

use stump_core::types::{Settings, SettingsPatch};

use crate::backend::KeyValueStore;
use crate::error::{StoreError, StoreResult};
use crate::repair::repair_settings;
use crate::SETTINGS_SLOT;

/// Owns the settings and writes them back after every change.
#[derive(Debug)]
pub struct SettingsStore<S: KeyValueStore> {
    backend: S,
    settings: Settings,
    last_save_error: Option<StoreError>,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn open(backend: S) -> Self {
        let settings = Self::read(&backend);
        SettingsStore {
            backend,
            settings,
            last_save_error: None,
        }
    }

    /// Re-reads the settings from the backend.
    pub fn load(&mut self) -> &Settings {
        self.settings = Self::read(&self.backend);
        &self.settings
    }

    fn read(backend: &S) -> Settings {
        let raw = match backend.get(SETTINGS_SLOT) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return Settings::default(),
            Err(e) => {
                warn!(error = %e, "could not read settings, using defaults");
                return Settings::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => repair_settings(&value),
            Err(e) => {
                warn!(error = %e, "saved settings are not valid JSON, using defaults");
                Settings::default()
            }
        }
    }

    pub fn save(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.settings)
            .map_err(|e| StoreError::serialization(SETTINGS_SLOT, e))?;
        self.backend.set(SETTINGS_SLOT, &json)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merges a patch and saves. A failed save is logged and remembered; the
    /// new values stay in effect.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> &Settings {
        self.settings.apply(patch);
        match self.save() {
            Ok(()) => {
                debug!("settings saved");
                self.last_save_error = None;
            }
            Err(e) => {
                warn!(error = %e, "failed to save settings");
                self.last_save_error = Some(e);
            }
        }
        &self.settings
    }

    pub fn last_save_error(&self) -> Option<&StoreError> {
        self.last_save_error.as_ref()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
