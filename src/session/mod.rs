//! The quiz session engine.
//!
//! [`QuizSession`] owns the whole lifecycle of one quiz run: selection,
//! active, paused and results. It is driven by discrete calls from the
//! presentation layer plus the callbacks of its own [`Scheduler`], and it
//! reports back through accessors and a queue of [`SessionEvent`]s.

use crate::data::QuizSettings;
use crate::errors::{QuizError, QuizResult};
use crate::model::{AnswerRecord, Question, QuizConfiguration, QuizPhase, QuizResults};
use crate::timer::{Scheduler, TimerEvent, TimerHandle};
use std::time::Duration;

// Submodules
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod queries;
pub mod timing;

pub use completion::{accuracy, compute_xp, xp_for};

/// Things the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    Started { session_id: String },
    AnswerRevealed { correct: bool },
    Streak(u32),
    Paused,
    Resumed,
    TimeExpired,
    Completed(QuizResults),
    Exited,
}

/// The mutable core of a running quiz.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: QuizPhase,
    pub current_question: usize,
    pub selected_answer: Option<String>,
    pub show_result: bool,
    pub time_remaining: u32,
    pub answers: Vec<AnswerRecord>,
    pub streak: u32,
}

#[derive(Debug)]
pub struct QuizSession {
    settings: QuizSettings,
    state: SessionState,
    config: Option<QuizConfiguration>,
    questions: Vec<Question>,
    session_id: Option<String>,
    sessions_started: u64,
    results: Option<QuizResults>,
    scheduler: Scheduler,
    events: Vec<SessionEvent>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuizSettings::default())
    }
}

impl QuizSession {
    pub fn new(settings: QuizSettings) -> Self {
        Self {
            settings,
            state: SessionState::default(),
            config: None,
            questions: Vec::new(),
            session_id: None,
            sessions_started: 0,
            results: None,
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    /// Continues session numbering after `count` earlier sessions, so ids stay
    /// unique across restarts of the app.
    pub fn set_sessions_started(&mut self, count: u64) {
        self.sessions_started = count;
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    fn emit(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    fn ignored(&self, action: &'static str) -> bool {
        log::debug!("ignoring `{action}` while quiz is {}", self.state.phase);
        false
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{ClassLevel, Difficulty, Question, QuizConfiguration, Subject};

    pub fn config(estimated_questions: u32, difficulty: Difficulty) -> QuizConfiguration {
        QuizConfiguration {
            class_level: ClassLevel::Class8,
            subject: Subject::Mathematics,
            topic: "algebra".into(),
            difficulty,
            estimated_questions,
            estimated_xp: 0,
        }
    }

    /// Five questions whose right answers are B, B, C, A, B.
    pub fn questions() -> Vec<Question> {
        let specs = [
            (1, "algebra", "B"),
            (2, "arithmetic", "B"),
            (3, "geometry", "C"),
            (4, "algebra", "A"),
            (5, "arithmetic", "B"),
        ];
        specs
            .iter()
            .map(|(id, topic, correct)| Question {
                id: *id,
                subject: Subject::Mathematics,
                topic: (*topic).into(),
                difficulty: Difficulty::Medium,
                text: format!("Question {id}"),
                options: vec!["one".into(), "two".into(), "three".into(), "four".into()],
                correct_answer: (*correct).into(),
                explanation: String::new(),
            })
            .collect()
    }

    pub const CORRECT: [&str; 5] = ["B", "B", "C", "A", "B"];
    pub const WRONG: &str = "D";
}
