use super::*;
use crate::store::results_key;
use eframe::{APP_KEY, Storage, get_value, set_value};

/// Writes finished sessions into the eframe key/value storage, one entry
/// per session under [`results_key`].
pub struct EframeStore<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> EframeStore<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }
}

impl ResultStore for EframeStore<'_> {
    fn persist(&mut self, session_id: &str, results: &QuizResults) -> QuizResult<()> {
        set_value(self.storage, &results_key(session_id), results);
        self.storage.flush();
        Ok(())
    }
}

/// Reads what [`save_state`] wrote on a previous run.
pub fn load_state(storage: Option<&dyn Storage>) -> Option<SavedState> {
    let state: Option<SavedState> = storage.and_then(|s| get_value(s, APP_KEY));
    if let Some(state) = &state {
        log::info!("restored {} earlier attempts", state.history.len());
    }
    state
}

pub fn save_state(app: &QuizApp, storage: &mut dyn Storage) {
    set_value(storage, APP_KEY, &app.saved_state());
}
