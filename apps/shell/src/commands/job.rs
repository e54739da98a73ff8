//! # Job Commands
//!
//! The quote view and job-level edits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QuoteView                                                              │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  job          client, address, stumps[]                        │    │
//! │  │  settings     rate, tax, company                               │    │
//! │  │  lineTotals   one per stump, same order                        │    │
//! │  │  totals       subtotal / taxAmount / total                     │    │
//! │  │  isValid      every stump has diameter > 0 and count > 0       │    │
//! │  │  validationMessage   "Enter diameter and count ... 2 missing." │    │
//! │  │  saveError    last failed save, if any                         │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use stump_core::types::{Job, JobPatch, QuoteTotals, Settings};
use stump_core::validation::ensure_quote_ready;
use stump_core::{calculate_quote, stump_line_total};
use stump_store::{DraftStore, KeyValueStore};

use crate::error::ApiError;
use crate::state::{DraftState, SettingsState};

/// Everything the quote screen renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    pub job: Job,
    pub settings: Settings,
    pub line_totals: Vec<f64>,
    pub totals: QuoteTotals,
    pub is_valid: bool,
    pub validation_message: Option<String>,
    pub save_error: Option<String>,
}

impl QuoteView {
    pub(crate) fn build<S: KeyValueStore>(drafts: &DraftStore<S>, settings: Settings) -> Self {
        let job = drafts.job();
        let validation = ensure_quote_ready(job).err();
        QuoteView {
            line_totals: job
                .stumps
                .iter()
                .map(|s| stump_line_total(s, &settings))
                .collect(),
            totals: calculate_quote(job, &settings),
            is_valid: validation.is_none(),
            validation_message: validation.map(|e| e.to_string()),
            save_error: drafts.last_save_error().map(|e| e.to_string()),
            job: job.clone(),
            settings,
        }
    }
}

/// Current draft with totals and validity.
pub fn get_quote<S: KeyValueStore>(drafts: &DraftState<S>, settings: &SettingsState<S>) -> QuoteView {
    debug!("get_quote command");
    let settings = settings.current();
    drafts.with_drafts(|d| QuoteView::build(d, settings))
}

/// Updates client name, address or status.
pub fn update_job<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
    patch: JobPatch,
) -> QuoteView {
    debug!(?patch, "update_job command");
    let settings = settings.current();
    drafts.with_drafts_mut(|d| {
        d.update_job(patch);
        QuoteView::build(d, settings)
    })
}

/// Throws the draft away and starts a new one.
pub fn reset_job<S: KeyValueStore>(drafts: &DraftState<S>, settings: &SettingsState<S>) -> QuoteView {
    info!("reset_job command");
    let settings = settings.current();
    drafts.with_drafts_mut(|d| {
        d.reset();
        QuoteView::build(d, settings)
    })
}

/// Retries writing the draft, e.g. after the user freed up storage.
pub fn save_draft<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
) -> Result<QuoteView, ApiError> {
    debug!("save_draft command");
    let settings = settings.current();
    drafts.with_drafts_mut(|d| -> Result<QuoteView, ApiError> {
        d.save()?;
        Ok(QuoteView::build(d, settings))
    })
}
