//! # Key-Value Backends
//!
//! The storage seam the stores are generic over.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KeyValueStore                                      │
//! │                                                                         │
//! │   DraftStore<S>  ─┐                                                     │
//! │                   ├──► S: KeyValueStore ──┬──► FileStore                │
//! │   SettingsStore<S>┘    get / set / remove │    <dir>/<slot>.json        │
//! │                                           │                             │
//! │                                           └──► MemoryStore              │
//! │                                                HashMap + optional quota │
//! │                                                (tests, quota failures)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomic Writes
//! `FileStore` writes `<slot>.json.tmp` and renames it over `<slot>.json`, so a
//! crash mid-write leaves the previous snapshot intact.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A string-valued key-value store, one value per slot.
pub trait KeyValueStore {
    /// Reads a slot. `Ok(None)` when nothing was ever written.
    fn get(&self, slot: &str) -> StoreResult<Option<String>>;

    /// Replaces the value in a slot.
    fn set(&mut self, slot: &str, value: &str) -> StoreResult<()>;
}

fn check_slot(slot: &str) -> StoreResult<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(slot.to_string()))
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Stores each slot as `<dir>/<slot>.json`.
///
/// ## Example
/// ```rust,no_run
/// use stump_store::{FileStore, KeyValueStore};
///
/// let mut store = FileStore::new("/tmp/stumpcalc");
/// store.set("stumpcalc_settings_v1", "{}").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, slot: &str) -> StoreResult<PathBuf> {
        check_slot(slot)?;
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(slot)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io(slot, err)),
        }
    }

    fn set(&mut self, slot: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(slot)?;
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(slot, e))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StoreError::io(slot, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(slot, e))?;

        debug!(slot, bytes = value.len(), "slot written");
        Ok(())
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory slots, optionally with a byte quota like browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Unlimited in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Store that rejects writes once all slots together would exceed
    /// `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStore {
            slots: HashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Seeds a slot without quota checks.
    pub fn with_slot(mut self, slot: &str, value: impl Into<String>) -> Self {
        self.slots.insert(slot.to_string(), value.into());
        self
    }

    /// Current raw contents of a slot.
    pub fn slot(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    fn used_without(&self, slot: &str) -> usize {
        self.slots
            .iter()
            .filter(|(key, _)| key.as_str() != slot)
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        check_slot(slot)?;
        Ok(self.slots.get(slot).cloned())
    }

    fn set(&mut self, slot: &str, value: &str) -> StoreResult<()> {
        check_slot(slot)?;
        if let Some(quota) = self.quota {
            let available = quota.saturating_sub(self.used_without(slot));
            let needed = slot.len() + value.len();
            if needed > available {
                return Err(StoreError::QuotaExceeded {
                    slot: slot.to_string(),
                    needed,
                    available,
                });
            }
        }
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
