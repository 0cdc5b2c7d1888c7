// src/view_models.rs

use crate::model::Difficulty;
use crate::report::{AttemptSummary, LeaderboardEntry, Recommendation, TopicBreakdown};

#[derive(Clone, Debug)]
pub struct TopicInfo {
    pub id: String,
    pub name: String,
    pub questions: u32,
    pub xp: u32,
    pub selected: bool,
}

#[derive(Clone, Debug)]
pub struct DifficultyInfo {
    pub difficulty: Difficulty,
    pub description: String,
    pub selected: bool,
}

/// The "Quiz Summary" card shown before starting.
#[derive(Clone, Debug)]
pub struct QuizSummary {
    pub path: String,
    pub difficulty: Difficulty,
    pub questions: u32,
    pub estimated_minutes: u32,
    pub estimated_xp: u32,
}

#[derive(Clone, Debug)]
pub struct ResultsView {
    pub score: usize,
    pub total_questions: usize,
    pub accuracy: u32,
    pub xp_earned: u32,
    pub time_spent_secs: u32,
    pub timed_out: bool,
    pub breakdown: Vec<TopicBreakdown>,
    pub recommendations: Vec<Recommendation>,
    pub previous_attempts: Vec<AttemptSummary>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl TopicInfo {
    pub fn label(&self) -> String {
        format!("{}\n{} questions • {} XP", self.name, self.questions, self.xp)
    }
}

impl DifficultyInfo {
    pub fn label(&self) -> String {
        format!(
            "{}\n{}\n{}x XP multiplier",
            self.difficulty,
            self.description,
            self.difficulty.xp_multiplier()
        )
    }
}

impl ResultsView {
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.total_questions)
    }

    pub fn headline(&self) -> &'static str {
        match self.accuracy {
            90..=100 => "Outstanding! 🏆",
            70..=89 => "Great job! 🎉",
            50..=69 => "Good effort! 👍",
            _ => "Keep practicing! 💪",
        }
    }
}

/// `mm:ss`, for the quiz header and the pause modal.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Spoken-style duration for the results card, e.g. `4m 05s`.
pub fn format_duration(secs: u32) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
