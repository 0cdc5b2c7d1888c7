// src/errors.rs

use crate::model::{QuizPhase, Subject};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("cannot start a quiz without questions")]
    EmptyQuestionSet,

    #[error("invalid quiz configuration: {0}")]
    InvalidConfiguration(String),

    #[error("`{action}` is not allowed while the quiz is {phase}")]
    InvalidTransition {
        phase: QuizPhase,
        action: &'static str,
    },

    #[error("unknown topic `{topic}` for subject {subject}")]
    UnknownTopic { subject: Subject, topic: String },

    #[error("failed to parse embedded data: {0}")]
    Catalog(#[from] serde_yaml::Error),

    #[error("failed to persist results: {0}")]
    Storage(String),
}

pub type QuizResult<T> = Result<T, QuizError>;
