//! # Draft State
//!
//! The draft store behind a mutex so any command thread can reach it.

use std::sync::{Arc, Mutex, PoisonError};

use stump_store::{DraftStore, FileStore, KeyValueStore};

/// Shared handle to the [`DraftStore`].
///
/// ## Usage
/// ```rust
/// use stump_store::MemoryStore;
/// use stumpcalc_shell::state::DraftState;
///
/// let drafts = DraftState::new(MemoryStore::new());
/// let id = drafts.with_drafts_mut(|d| d.add_stump());
/// assert!(drafts.with_drafts(|d| d.job().stump(&id).is_some()));
/// ```
#[derive(Debug)]
pub struct DraftState<S: KeyValueStore = FileStore> {
    drafts: Arc<Mutex<DraftStore<S>>>,
}

impl<S: KeyValueStore> DraftState<S> {
    /// Opens the draft store over `backend`.
    pub fn new(backend: S) -> Self {
        DraftState {
            drafts: Arc::new(Mutex::new(DraftStore::open(backend))),
        }
    }

    /// Executes a function with read access to the draft store.
    pub fn with_drafts<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DraftStore<S>) -> R,
    {
        let drafts = self.drafts.lock().unwrap_or_else(PoisonError::into_inner);
        f(&drafts)
    }

    /// Executes a function with write access to the draft store.
    pub fn with_drafts_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DraftStore<S>) -> R,
    {
        let mut drafts = self.drafts.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut drafts)
    }
}

impl<S: KeyValueStore> Clone for DraftState<S> {
    fn clone(&self) -> Self {
        DraftState {
            drafts: Arc::clone(&self.drafts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use stump_store::MemoryStore;

    #[test]
    fn test_clones_share_one_draft() {
        let state = DraftState::new(MemoryStore::new());
        let other = state.clone();

        thread::spawn(move || {
            other.with_drafts_mut(|d| d.add_stump());
        })
        .join()
        .unwrap();

        assert_eq!(state.with_drafts(|d| d.job().stumps.len()), 2);
    }
}
