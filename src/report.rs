// src/report.rs

//! Display-only aggregation around a finished session: per-topic
//! breakdown, study recommendations, the leaderboard and past attempts.
//! None of this feeds back into the engine.

use crate::data::LeaderboardSeed;
use crate::model::{AnswerRecord, Question, QuizResults};
use crate::session::accuracy;
use crate::store::MemoryStore;

/// Below this accuracy a topic is flagged for practice.
pub const PRACTICE_THRESHOLD: u32 = 70;

#[derive(Clone, Debug, PartialEq)]
pub struct TopicBreakdown {
    pub topic: String,
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
    pub accuracy: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub xp: u32,
    pub is_current_user: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttemptSummary {
    pub date: String,
    pub score: u32,
    pub xp: u32,
}

/// Correctness per topic, topics in order of first appearance in the quiz.
pub fn topic_breakdown(questions: &[Question], answers: &[AnswerRecord]) -> Vec<TopicBreakdown> {
    let mut rows: Vec<TopicBreakdown> = Vec::new();

    for q in questions {
        let answer = answers.iter().find(|a| a.question_id == q.id);
        let row = match rows.iter().position(|r| r.topic == q.topic) {
            Some(i) => &mut rows[i],
            None => {
                rows.push(TopicBreakdown {
                    topic: q.topic.clone(),
                    correct: 0,
                    answered: 0,
                    total: 0,
                    accuracy: 0,
                });
                let last = rows.len() - 1;
                &mut rows[last]
            }
        };
        row.total += 1;
        if let Some(a) = answer {
            row.answered += 1;
            if a.is_correct {
                row.correct += 1;
            }
        }
    }

    for row in &mut rows {
        row.accuracy = accuracy(row.correct, row.answered);
    }
    rows
}

/// One suggestion per topic; `topic_name` maps ids to display names.
pub fn recommendations(
    breakdown: &[TopicBreakdown],
    topic_name: impl Fn(&str) -> String,
) -> Vec<Recommendation> {
    breakdown
        .iter()
        .map(|row| {
            let name = topic_name(&row.topic);
            if row.answered == 0 {
                Recommendation {
                    title: format!("Review {name}"),
                    description: "You ran out of time before reaching these questions".into(),
                }
            } else if row.accuracy < PRACTICE_THRESHOLD {
                Recommendation {
                    title: format!("Practice {name}"),
                    description: format!(
                        "{} of {} correct. Go over the explanations and try again",
                        row.correct, row.answered
                    ),
                }
            } else {
                Recommendation {
                    title: format!("Keep going with {name}"),
                    description: "You're doing well! Try a harder difficulty next".into(),
                }
            }
        })
        .collect()
}

/// Static board with the current user slotted in by score.
pub fn leaderboard(seeds: &[LeaderboardSeed], results: &QuizResults) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = seeds
        .iter()
        .map(|s| LeaderboardEntry {
            name: s.name.clone(),
            score: s.score,
            xp: s.xp,
            is_current_user: false,
        })
        .collect();
    entries.push(LeaderboardEntry {
        name: "You".into(),
        score: results.accuracy,
        xp: results.xp_earned,
        is_current_user: true,
    });
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// Earlier attempts, newest first, excluding the session on screen.
pub fn previous_attempts(history: &MemoryStore, current_session: &str) -> Vec<AttemptSummary> {
    history
        .recent()
        .filter(|a| a.results.session_id != current_session)
        .map(|a| AttemptSummary {
            date: a.date.clone(),
            score: a.results.accuracy,
            xp: a.results.xp_earned,
        })
        .collect()
}
