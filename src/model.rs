use crate::errors::{QuizError, QuizResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub enum ClassLevel {
    #[serde(rename = "6")]
    Class6,
    #[serde(rename = "7")]
    Class7,
    #[default]
    #[serde(rename = "8")]
    Class8,
    #[serde(rename = "9")]
    Class9,
    #[serde(rename = "10")]
    Class10,
    #[serde(rename = "11")]
    Class11,
    #[serde(rename = "12")]
    Class12,
}

impl ClassLevel {
    pub const ALL: [ClassLevel; 7] = [
        ClassLevel::Class6,
        ClassLevel::Class7,
        ClassLevel::Class8,
        ClassLevel::Class9,
        ClassLevel::Class10,
        ClassLevel::Class11,
        ClassLevel::Class12,
    ];

    pub fn grade(self) -> u8 {
        match self {
            ClassLevel::Class6 => 6,
            ClassLevel::Class7 => 7,
            ClassLevel::Class8 => 8,
            ClassLevel::Class9 => 9,
            ClassLevel::Class10 => 10,
            ClassLevel::Class11 => 11,
            ClassLevel::Class12 => 12,
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class {}", self.grade())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    #[default]
    Mathematics,
    Science,
    English,
    Hindi,
    SocialScience,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::English,
        Subject::Hindi,
        Subject::SocialScience,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::Hindi => "Hindi",
            Subject::SocialScience => "Social Science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Factor applied to every XP amount earned at this difficulty.
    pub fn xp_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the selection step hands to the engine. Never changes once a session runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct QuizConfiguration {
    pub class_level: ClassLevel,
    pub subject: Subject,
    pub topic: String,
    pub difficulty: Difficulty,
    pub estimated_questions: u32,
    pub estimated_xp: u32,
}

impl QuizConfiguration {
    pub fn validate(&self) -> QuizResult<()> {
        if self.estimated_questions == 0 {
            return Err(QuizError::InvalidConfiguration(
                "estimated question count must be positive".into(),
            ));
        }
        if self.topic.trim().is_empty() {
            return Err(QuizError::InvalidConfiguration("no topic selected".into()));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: u32,
    pub subject: Subject,
    pub topic: String,
    pub difficulty: Difficulty,
    pub text: String,
    pub options: Vec<String>,
    /// Label (A, B, C…) of the right option.
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Label shown next to the option at `index`: A, B, C…
    pub fn option_label(index: usize) -> String {
        let offset = u8::try_from(index % 26).unwrap_or(0);
        char::from(b'A' + offset).to_string()
    }

    pub fn labeled_options(&self) -> impl Iterator<Item = (String, &str)> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, text)| (Self::option_label(i), text.as_str()))
    }

    pub fn option_text(&self, label: &str) -> Option<&str> {
        self.labeled_options()
            .find(|(l, _)| l == label)
            .map(|(_, text)| text)
    }

    pub fn is_correct(&self, label: &str) -> bool {
        label == self.correct_answer
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub selected_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    /// Seconds elapsed since the session started.
    pub time_spent_secs: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Selection,
    Active,
    Paused,
    Results,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizPhase::Selection => "in selection",
            QuizPhase::Active => "active",
            QuizPhase::Paused => "paused",
            QuizPhase::Results => "showing results",
        };
        f.write_str(name)
    }
}

/// Snapshot taken when a session finishes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizResults {
    pub session_id: String,
    pub config: QuizConfiguration,
    pub total_questions: usize,
    pub answered: usize,
    pub correct_answers: usize,
    pub accuracy: u32,
    pub xp_earned: u32,
    pub time_spent_secs: u32,
    pub timed_out: bool,
    pub answers: Vec<AnswerRecord>,
}

impl QuizResults {
    pub fn score(&self) -> usize {
        self.correct_answers
    }
}
