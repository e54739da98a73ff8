//! # Sharing
//!
//! Hands the quote text to the platform: the native share sheet when there is
//! one, the clipboard otherwise.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  share_with_fallback(native, clipboard, title, text)                    │
//! │       │                                                                 │
//! │       ├── native present? ── share() ok ──────────► Shared              │
//! │       │         │                                                       │
//! │       │         └── failed/cancelled (warn) ─┐                          │
//! │       ▼                                      ▼                          │
//! │  clipboard.share() ok ─────────────────────► Copied                     │
//! │       │                                                                 │
//! │       └── failed (warn) ───────────────────► Err(ShareError)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Title passed to share sheets.
pub const SHARE_TITLE: &str = "Stump quote";

#[derive(Debug, Error)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    #[error("Share cancelled")]
    Cancelled,

    /// The target is not available on this device.
    #[error("{0} is not available")]
    Unavailable(String),

    #[error("Share failed: {0}")]
    Failed(String),
}

/// Somewhere quote text can be sent.
pub trait ShareTarget {
    /// Short name for logs ("share sheet", "clipboard").
    fn name(&self) -> &str;

    fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
}

/// Where the text ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareOutcome {
    Shared,
    Copied,
}

pub fn share_with_fallback(
    native: Option<&dyn ShareTarget>,
    clipboard: &dyn ShareTarget,
    title: &str,
    text: &str,
) -> Result<ShareOutcome, ShareError> {
    if let Some(target) = native {
        match target.share(title, text) {
            Ok(()) => {
                debug!(target = target.name(), "quote shared");
                return Ok(ShareOutcome::Shared);
            }
            Err(e) => warn!(target = target.name(), error = %e, "share failed, trying clipboard"),
        }
    }

    clipboard.share(title, text).map_err(|e| {
        warn!(target = clipboard.name(), error = %e, "share/clipboard failed");
        e
    })?;
    debug!(target = clipboard.name(), "quote copied");
    Ok(ShareOutcome::Copied)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records what it was given; fails when `fail` is set.
    pub(crate) struct RecordingTarget {
        pub name: &'static str,
        pub fail: Option<fn() -> ShareError>,
        pub received: RefCell<Vec<(String, String)>>,
    }

    impl RecordingTarget {
        pub(crate) fn ok(name: &'static str) -> Self {
            RecordingTarget {
                name,
                fail: None,
                received: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn failing(name: &'static str, fail: fn() -> ShareError) -> Self {
            RecordingTarget {
                fail: Some(fail),
                ..RecordingTarget::ok(name)
            }
        }
    }

    impl ShareTarget for RecordingTarget {
        fn name(&self) -> &str {
            self.name
        }

        fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
            if let Some(fail) = self.fail {
                return Err(fail());
            }
            self.received
                .borrow_mut()
                .push((title.to_string(), text.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_native_share_preferred() {
        let native = RecordingTarget::ok("share sheet");
        let clipboard = RecordingTarget::ok("clipboard");

        let outcome = share_with_fallback(Some(&native), &clipboard, SHARE_TITLE, "hello").unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(native.received.borrow().len(), 1);
        assert!(clipboard.received.borrow().is_empty());
    }

    #[test]
    fn test_cancelled_share_falls_back_to_clipboard() {
        let native = RecordingTarget::failing("share sheet", || ShareError::Cancelled);
        let clipboard = RecordingTarget::ok("clipboard");

        let outcome = share_with_fallback(Some(&native), &clipboard, SHARE_TITLE, "hello").unwrap();
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.received.borrow()[0].1, "hello");
    }

    #[test]
    fn test_no_native_target() {
        let clipboard = RecordingTarget::ok("clipboard");
        let outcome = share_with_fallback(None, &clipboard, SHARE_TITLE, "x").unwrap();
        assert_eq!(outcome, ShareOutcome::Copied);
    }

    #[test]
    fn test_everything_fails() {
        let clipboard =
            RecordingTarget::failing("clipboard", || ShareError::Unavailable("clipboard".into()));
        let err = share_with_fallback(None, &clipboard, SHARE_TITLE, "x").unwrap_err();
        assert_eq!(err.to_string(), "clipboard is not available");
    }
}
