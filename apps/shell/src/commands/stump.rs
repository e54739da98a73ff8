//! # Stump Commands
//!
//! Adding, editing and removing stumps and their photos.
//!
//! ## Stump Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_stump ──► "Stump N" (diameter 0, count 1) ── invalid until measured│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update_stump(id, { diameter, count, isComplex, ... })                  │
//! │       │                                                                 │
//! │       ├── attach_photos(id, files)  ≤ 3 per stump, extras dropped       │
//! │       ├── remove_photo(id, photo_id)                                    │
//! │       ▼                                                                 │
//! │  remove_stump(id)  ── refused for the last stump of the job             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use stump_core::types::{Photo, StumpPatch};
use stump_core::{CoreError, MAX_PHOTOS_PER_STUMP};
use stump_store::KeyValueStore;

use super::job::QuoteView;
use crate::error::ApiError;
use crate::state::{DraftState, SettingsState};

/// A picked image, already read into a data URL by the UI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUpload {
    pub name: String,
    pub data_url: String,
}

/// Result of [`attach_photos`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotosAttached {
    pub accepted: usize,
    pub dropped: usize,
    pub quote: QuoteView,
}

/// Merges form changes into one stump.
pub fn update_stump<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
    stump_id: &str,
    patch: StumpPatch,
) -> Result<QuoteView, ApiError> {
    debug!(stump_id = %stump_id, "update_stump command");
    let settings = settings.current();
    drafts.with_drafts_mut(|d| -> Result<QuoteView, ApiError> {
        if !d.update_stump(stump_id, patch) {
            return Err(CoreError::StumpNotFound(stump_id.to_string()).into());
        }
        Ok(QuoteView::build(d, settings))
    })
}

/// Appends a blank stump. It is the last entry of `job.stumps` in the
/// returned view.
pub fn add_stump<S: KeyValueStore>(drafts: &DraftState<S>, settings: &SettingsState<S>) -> QuoteView {
    let settings = settings.current();
    drafts.with_drafts_mut(|d| {
        let id = d.add_stump();
        debug!(stump_id = %id, "add_stump command");
        QuoteView::build(d, settings)
    })
}

/// Removes a stump. The last remaining stump cannot be removed.
pub fn remove_stump<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
    stump_id: &str,
) -> Result<QuoteView, ApiError> {
    debug!(stump_id = %stump_id, "remove_stump command");
    let settings = settings.current();
    drafts.with_drafts_mut(|d| -> Result<QuoteView, ApiError> {
        if d.job().stump(stump_id).is_none() {
            return Err(CoreError::StumpNotFound(stump_id.to_string()).into());
        }
        if d.job().stumps.len() <= 1 {
            return Err(CoreError::LastStump.into());
        }
        d.remove_stump(stump_id);
        Ok(QuoteView::build(d, settings))
    })
}

/// Attaches picked photos to a stump. Files beyond the per-stump limit are
/// dropped and counted; a stump that is already full is an error.
pub fn attach_photos<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
    stump_id: &str,
    uploads: Vec<PhotoUpload>,
) -> Result<PhotosAttached, ApiError> {
    debug!(stump_id = %stump_id, files = uploads.len(), "attach_photos command");
    let settings = settings.current();
    drafts.with_drafts_mut(|d| -> Result<PhotosAttached, ApiError> {
        let stump = d
            .job()
            .stump(stump_id)
            .ok_or_else(|| CoreError::StumpNotFound(stump_id.to_string()))?;
        if !uploads.is_empty() && stump.remaining_photo_slots() == 0 {
            return Err(CoreError::PhotoLimitReached {
                stump_id: stump_id.to_string(),
                max: MAX_PHOTOS_PER_STUMP,
            }
            .into());
        }

        let offered = uploads.len();
        let photos = uploads
            .into_iter()
            .map(|u| Photo::new(u.name, u.data_url))
            .collect();
        let accepted = d.add_photos(stump_id, photos);

        Ok(PhotosAttached {
            accepted,
            dropped: offered - accepted,
            quote: QuoteView::build(d, settings),
        })
    })
}

pub fn remove_photo<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
    stump_id: &str,
    photo_id: &str,
) -> Result<QuoteView, ApiError> {
    debug!(stump_id = %stump_id, photo_id = %photo_id, "remove_photo command");
    let settings = settings.current();
    drafts.with_drafts_mut(|d| -> Result<QuoteView, ApiError> {
        if d.job().stump(stump_id).is_none() {
            return Err(CoreError::StumpNotFound(stump_id.to_string()).into());
        }
        if !d.remove_photo(stump_id, photo_id) {
            return Err(CoreError::PhotoNotFound {
                stump_id: stump_id.to_string(),
                photo_id: photo_id.to_string(),
            }
            .into());
        }
        Ok(QuoteView::build(d, settings))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stump_store::MemoryStore;

    fn states() -> (DraftState<MemoryStore>, SettingsState<MemoryStore>) {
        (
            DraftState::new(MemoryStore::new()),
            SettingsState::new(MemoryStore::new()),
        )
    }

    fn upload(n: usize) -> PhotoUpload {
        PhotoUpload {
            name: format!("stump-{}.jpg", n),
            data_url: "data:image/jpeg;base64,AAAA".to_string(),
        }
    }

    fn first_stump(drafts: &DraftState<MemoryStore>) -> String {
        drafts.with_drafts(|d| d.job().stumps[0].id.clone())
    }

    #[test]
    fn test_update_unknown_stump_is_not_found() {
        let (drafts, settings) = states();
        let err = update_stump(&drafts, &settings, "nope", StumpPatch::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_surcharges_in_view() {
        let (drafts, settings) = states();
        let id = first_stump(&drafts);
        let view = update_stump(
            &drafts,
            &settings,
            &id,
            StumpPatch {
                diameter: Some(10.0),
                count: Some(2),
                is_complex: Some(true),
                is_tight_access: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        // 10 × 5 × 2 × 1.3
        assert!((view.line_totals[0] - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_and_remove_stumps() {
        let (drafts, settings) = states();
        let view = add_stump(&drafts, &settings);
        assert_eq!(view.job.stumps.len(), 2);
        let added = view.job.stumps[1].id.clone();

        let view = remove_stump(&drafts, &settings, &added).unwrap();
        assert_eq!(view.job.stumps.len(), 1);

        let last = first_stump(&drafts);
        let err = remove_stump(&drafts, &settings, &last).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "A quote needs at least one stump");

        let err = remove_stump(&drafts, &settings, "gone").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_attach_photos_drops_extras() {
        let (drafts, settings) = states();
        let id = first_stump(&drafts);

        let result = attach_photos(&drafts, &settings, &id, (1..=5).map(upload).collect()).unwrap();
        assert_eq!(result.accepted, 3);
        assert_eq!(result.dropped, 2);
        assert_eq!(result.quote.job.stumps[0].photos.len(), 3);

        let err = attach_photos(&drafts, &settings, &id, vec![upload(6)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_remove_photo() {
        let (drafts, settings) = states();
        let id = first_stump(&drafts);
        let result = attach_photos(&drafts, &settings, &id, vec![upload(1)]).unwrap();
        let photo_id = result.quote.job.stumps[0].photos[0].id.clone();

        let view = remove_photo(&drafts, &settings, &id, &photo_id).unwrap();
        assert!(view.job.stumps[0].photos.is_empty());

        let err = remove_photo(&drafts, &settings, &id, &photo_id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
