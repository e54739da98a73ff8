//! # Draft Repository
//!
//! The single in-progress quote, kept in memory and mirrored to the job slot.
//!
//! ## Snapshot Without Photos
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  In memory (Job)                     Persisted (JobSnapshot)            │
//! │  ─────────────────────               ─────────────────────────          │
//! │  id, clientName, address             id, clientName, address            │
//! │  status, createdAt                   status, createdAt                  │
//! │  stumps[]                    ──►     stumps[]                           │
//! │    diameter, count, ...                diameter, count, ...             │
//! │    photos: [data urls...]              (no photos key)                  │
//! │                                                                         │
//! │  Photos are session-only. A reload brings the draft back without them. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use stump_core::types::{Job, JobPatch, JobStatus, Photo, Stump, StumpPatch};

use crate::backend::KeyValueStore;
use crate::error::{StoreError, StoreResult};
use crate::repair::repair_job;
use crate::JOB_SLOT;

// =============================================================================
// Persisted Snapshot
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobSnapshot<'a> {
    id: &'a str,
    client_name: &'a str,
    address: &'a str,
    status: JobStatus,
    created_at: &'a DateTime<Utc>,
    stumps: Vec<StumpSnapshot<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StumpSnapshot<'a> {
    id: &'a str,
    diameter: f64,
    count: u32,
    location_description: Option<&'a str>,
    notes: Option<&'a str>,
    is_complex: bool,
    is_tight_access: bool,
}

impl<'a> From<&'a Job> for JobSnapshot<'a> {
    fn from(job: &'a Job) -> Self {
        JobSnapshot {
            id: &job.id,
            client_name: &job.client_name,
            address: &job.address,
            status: job.status,
            created_at: &job.created_at,
            stumps: job.stumps.iter().map(StumpSnapshot::from).collect(),
        }
    }
}

impl<'a> From<&'a Stump> for StumpSnapshot<'a> {
    fn from(stump: &'a Stump) -> Self {
        StumpSnapshot {
            id: &stump.id,
            // serde_json writes NaN/inf as null; repair turns that back into 0.
            diameter: stump.diameter,
            count: stump.count,
            location_description: stump.location_description.as_deref(),
            notes: stump.notes.as_deref(),
            is_complex: stump.is_complex,
            is_tight_access: stump.is_tight_access,
        }
    }
}

// =============================================================================
// Draft Store
// =============================================================================

/// Owns the draft job and writes it back after every change.
///
/// ## Usage
/// ```rust
/// use stump_core::types::JobPatch;
/// use stump_store::{DraftStore, MemoryStore};
///
/// let mut drafts = DraftStore::open(MemoryStore::new());
/// drafts.update_job(JobPatch { client_name: Some("Pat".into()), ..Default::default() });
///
/// // A second store over the same slots sees the change.
/// let reopened = DraftStore::open(drafts.into_backend());
/// assert_eq!(reopened.job().client_name, "Pat");
/// ```
#[derive(Debug)]
pub struct DraftStore<S: KeyValueStore> {
    backend: S,
    job: Job,
    last_save_error: Option<StoreError>,
}

impl<S: KeyValueStore> DraftStore<S> {
    /// Opens the store and loads whatever draft the backend holds.
    pub fn open(backend: S) -> Self {
        let job = Self::read(&backend);
        DraftStore {
            backend,
            job,
            last_save_error: None,
        }
    }

    /// Re-reads the draft from the backend, replacing the in-memory copy.
    pub fn load(&mut self) -> &Job {
        self.job = Self::read(&self.backend);
        &self.job
    }

    fn read(backend: &S) -> Job {
        let raw = match backend.get(JOB_SLOT) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                debug!("no saved draft, starting fresh");
                return Job::new();
            }
            Err(e) => {
                warn!(error = %e, "could not read saved draft, starting fresh");
                return Job::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => {
                let job = repair_job(&value);
                debug!(job_id = %job.id, stumps = job.stumps.len(), "draft loaded");
                job
            }
            Err(e) => {
                warn!(error = %e, "saved draft is not valid JSON, starting fresh");
                Job::new()
            }
        }
    }

    /// Writes the draft (photos stripped) to the job slot.
    pub fn save(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&JobSnapshot::from(&self.job))
            .map_err(|e| StoreError::serialization(JOB_SLOT, e))?;
        self.backend.set(JOB_SLOT, &json)
    }

    /// Saves and records the outcome instead of returning it.
    fn persist(&mut self) {
        match self.save() {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                warn!(error = %e, "failed to save draft; keeping in-memory copy");
                self.last_save_error = Some(e);
            }
        }
    }

    /// The current draft.
    pub fn job(&self) -> &Job {
        &self.job
    }

    /// The error from the most recent save, if it failed.
    pub fn last_save_error(&self) -> Option<&StoreError> {
        self.last_save_error.as_ref()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Merges job metadata (client, address, status).
    pub fn update_job(&mut self, patch: JobPatch) {
        self.job.apply(patch);
        self.persist();
    }

    /// Merges a patch into one stump. Returns `false` (and changes nothing)
    /// when no stump has that id.
    pub fn update_stump(&mut self, id: &str, patch: StumpPatch) -> bool {
        let Some(stump) = self.job.stump_mut(id) else {
            debug!(stump_id = %id, "update for unknown stump ignored");
            return false;
        };
        stump.apply(patch);
        self.persist();
        true
    }

    /// Appends a blank stump named after its position and returns its id.
    pub fn add_stump(&mut self) -> String {
        let stump = Stump::numbered(self.job.stumps.len() + 1);
        let id = stump.id.clone();
        self.job.stumps.push(stump);
        self.persist();
        id
    }

    /// Removes the stump with `id`. Returns `false` when there was none.
    pub fn remove_stump(&mut self, id: &str) -> bool {
        let before = self.job.stumps.len();
        self.job.stumps.retain(|s| s.id != id);
        if self.job.stumps.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Discards the draft and starts a new one.
    pub fn reset(&mut self) -> &Job {
        self.job = Job::new();
        info!(job_id = %self.job.id, "draft reset");
        self.persist();
        &self.job
    }

    /// Attaches photos to a stump until it holds three. Returns how many were
    /// accepted; the rest are dropped.
    pub fn add_photos(&mut self, stump_id: &str, photos: Vec<Photo>) -> usize {
        let Some(stump) = self.job.stump_mut(stump_id) else {
            return 0;
        };
        let accepted = photos.len().min(stump.remaining_photo_slots());
        stump.photos.extend(photos.into_iter().take(accepted));
        if accepted > 0 {
            self.persist();
        }
        accepted
    }

    /// Detaches one photo. Returns `false` when the stump or photo is unknown.
    pub fn remove_photo(&mut self, stump_id: &str, photo_id: &str) -> bool {
        let Some(stump) = self.job.stump_mut(stump_id) else {
            return false;
        };
        let before = stump.photos.len();
        stump.photos.retain(|p| p.id != photo_id);
        if stump.photos.len() == before {
            return false;
        }
        self.persist();
        true
    }

    // =========================================================================
    // Backend Access
    // =========================================================================

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Consumes the store, handing back the backend.
    pub fn into_backend(self) -> S {
        self.backend
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
