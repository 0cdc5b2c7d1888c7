use crate::data::{
    Catalog, QuestionBank, QuestionProvider, read_catalog_embedded, read_question_bank_embedded,
};
use crate::errors::{QuizError, QuizResult};
use crate::model::{ClassLevel, Difficulty, QuizPhase, QuizResults, Subject};
use crate::session::{QuizSession, SessionEvent};
use crate::store::{MemoryStore, ResultStore};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Submodules
pub mod actions;
pub mod persistence;
pub mod selection;
pub mod updates;
pub mod view_models;

pub use persistence::{EframeStore, load_state, save_state};

/// How long the "N in a row" toast stays up, in seconds.
pub const STREAK_TOAST_SECS: f64 = 3.0;

/// The topic selector form. Starts at Class 8, Mathematics, no topic, Medium.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TopicSelection {
    pub class_level: ClassLevel,
    pub subject: Subject,
    pub topic: Option<String>,
    pub difficulty: Difficulty,
}

/// Part of the app that survives restarts.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SavedState {
    pub selection: TopicSelection,
    pub history: MemoryStore,
    /// Sessions started so far, finished or not.
    #[serde(default)]
    pub sessions_started: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StreakToast {
    pub message: String,
    pub expires_at: f64,
}

pub struct QuizApp {
    pub catalog: Catalog,
    pub bank: QuestionBank,
    pub session: QuizSession,
    pub selection: TopicSelection,
    pub history: MemoryStore,
    pub message: String,
    pub streak_toast: Option<StreakToast>,
    pub confirm_exit: bool,
    last_frame: Option<f64>,
}

impl QuizApp {
    /// Builds the app from the embedded catalog, restoring `saved` if given.
    pub fn new(saved: Option<SavedState>) -> QuizResult<Self> {
        let catalog = read_catalog_embedded()?;
        let bank = read_question_bank_embedded()?;
        Ok(Self::with_data(catalog, bank, saved.unwrap_or_default()))
    }

    pub fn with_data(catalog: Catalog, bank: QuestionBank, saved: SavedState) -> Self {
        let mut session = QuizSession::new(catalog.settings);
        let numbered = saved.history.highest_session_number().unwrap_or(0);
        session.set_sessions_started(saved.sessions_started.max(numbered));

        Self {
            catalog,
            bank,
            session,
            selection: saved.selection,
            history: saved.history,
            message: String::new(),
            streak_toast: None,
            confirm_exit: false,
            last_frame: None,
        }
    }

    pub fn saved_state(&self) -> SavedState {
        SavedState {
            selection: self.selection.clone(),
            history: self.history.clone(),
            sessions_started: self.session.sessions_started(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }
}
