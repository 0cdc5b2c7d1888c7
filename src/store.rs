// src/store.rs

use crate::errors::QuizResult;
use crate::model::QuizResults;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which a finished session's snapshot is written.
pub fn results_key(session_id: &str) -> String {
    format!("quiz_results/{session_id}")
}

/// Somewhere to drop a finished session's results. Writes are
/// fire-and-forget: callers log a failure and move on.
pub trait ResultStore {
    fn persist(&mut self, session_id: &str, results: &QuizResults) -> QuizResult<()>;
}

/// A finished attempt, as kept in the history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredAttempt {
    /// Calendar day the attempt finished, `YYYY-MM-DD`.
    pub date: String,
    pub results: QuizResults,
}

/// In-memory store. Doubles as the attempt history the app persists.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MemoryStore {
    attempts: BTreeMap<String, StoredAttempt>,
    /// Session ids in the order they were stored.
    order: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_id: &str) -> Option<&StoredAttempt> {
        self.attempts.get(session_id)
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Largest `NNNN` among stored `quiz-NNNN` ids.
    pub fn highest_session_number(&self) -> Option<u64> {
        self.attempts
            .keys()
            .filter_map(|id| id.strip_prefix("quiz-")?.parse().ok())
            .max()
    }

    /// Attempts, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &StoredAttempt> {
        self.order.iter().rev().filter_map(|id| self.attempts.get(id))
    }

    pub fn insert_dated(&mut self, session_id: &str, date: String, results: &QuizResults) {
        let attempt = StoredAttempt {
            date,
            results: results.clone(),
        };
        if self.attempts.insert(session_id.to_string(), attempt).is_none() {
            self.order.push(session_id.to_string());
        }
    }
}

impl ResultStore for MemoryStore {
    fn persist(&mut self, session_id: &str, results: &QuizResults) -> QuizResult<()> {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        self.insert_dated(session_id, today, results);
        Ok(())
    }
}
