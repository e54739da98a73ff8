//! # Quote Distribution Commands
//!
//! Turning the draft into text that leaves the app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote_text ───► quote_lines ──► share_text ──► String                 │
//! │  email_link ───► mailto:?subject=...&body=...                          │
//! │  share_quote ──► share sheet, else clipboard                           │
//! │                                                                         │
//! │  All three refuse an incomplete draft (VALIDATION_ERROR).              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use stump_core::quote::{email_subject, mailto_link, share_text};
use stump_core::validation::ensure_quote_ready;
use stump_core::{calculate_quote, quote_lines};
use stump_store::KeyValueStore;

use crate::error::ApiError;
use crate::share::{share_with_fallback, ShareOutcome, ShareTarget, SHARE_TITLE};
use crate::state::{DraftState, SettingsState};

/// The finished quote as plain text.
pub fn quote_text<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
) -> Result<String, ApiError> {
    debug!("quote_text command");
    let settings = settings.current();
    drafts.with_drafts(|d| -> Result<String, ApiError> {
        let job = d.job();
        ensure_quote_ready(job)?;
        let totals = calculate_quote(job, &settings);
        Ok(share_text(&quote_lines(job, &settings, &totals)))
    })
}

/// A `mailto:` link with the quote as the body and no recipient.
pub fn email_link<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
) -> Result<String, ApiError> {
    let body = quote_text(drafts, settings)?;
    let subject = email_subject(&settings.current());
    debug!(bytes = body.len(), "email_link command");
    Ok(mailto_link(&subject, &body))
}

/// Shares the quote through `native` when given, otherwise (or when it fails)
/// copies it with `clipboard`.
pub fn share_quote<S: KeyValueStore>(
    drafts: &DraftState<S>,
    settings: &SettingsState<S>,
    native: Option<&dyn ShareTarget>,
    clipboard: &dyn ShareTarget,
) -> Result<ShareOutcome, ApiError> {
    let text = quote_text(drafts, settings)?;
    let outcome = share_with_fallback(native, clipboard, SHARE_TITLE, &text)?;
    info!(?outcome, "share_quote command");
    Ok(outcome)
}
