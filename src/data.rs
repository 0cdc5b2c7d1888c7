// src/data.rs

use crate::errors::{QuizError, QuizResult};
use crate::model::{ClassLevel, Difficulty, Question, QuizConfiguration, Subject};
use serde::{Deserialize, Serialize};

/// Engine timing and scoring constants.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct QuizSettings {
    #[serde(default = "default_seconds_per_question")]
    pub seconds_per_question: u32,
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_xp_per_correct")]
    pub xp_per_correct: u32,
}

fn default_seconds_per_question() -> u32 {
    120
}
fn default_reveal_delay_ms() -> u64 {
    500
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_xp_per_correct() -> u32 {
    20
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            seconds_per_question: default_seconds_per_question(),
            reveal_delay_ms: default_reveal_delay_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            xp_per_correct: default_xp_per_correct(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicSpec {
    pub id: String,
    pub name: String,
    pub questions: u32,
    pub xp: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubjectSpec {
    pub id: Subject,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub topics: Vec<TopicSpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DifficultySpec {
    pub id: Difficulty,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardSeed {
    pub name: String,
    pub score: u32,
    pub xp: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub settings: QuizSettings,
    pub classes: Vec<ClassLevel>,
    pub subjects: Vec<SubjectSpec>,
    pub difficulties: Vec<DifficultySpec>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardSeed>,
}

impl Catalog {
    pub fn subject(&self, subject: Subject) -> Option<&SubjectSpec> {
        self.subjects.iter().find(|s| s.id == subject)
    }

    pub fn topics(&self, subject: Subject) -> &[TopicSpec] {
        self.subject(subject)
            .map(|s| s.topics.as_slice())
            .unwrap_or(&[])
    }

    pub fn topic(&self, subject: Subject, topic_id: &str) -> Option<&TopicSpec> {
        self.topics(subject).iter().find(|t| t.id == topic_id)
    }

    pub fn difficulty(&self, difficulty: Difficulty) -> Option<&DifficultySpec> {
        self.difficulties.iter().find(|d| d.id == difficulty)
    }

    /// Display name of a topic id, falling back to the id itself.
    pub fn topic_name(&self, topic_id: &str) -> String {
        self.subjects
            .iter()
            .flat_map(|s| &s.topics)
            .find(|t| t.id == topic_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| topic_id.to_string())
    }

    /// XP promised on the selection screen.
    pub fn estimated_xp(topic: &TopicSpec, difficulty: Difficulty) -> u32 {
        (f64::from(topic.xp) * difficulty.xp_multiplier()).floor() as u32
    }

    /// Minutes shown on the selection screen, a minute and a half per question.
    pub fn estimated_minutes(topic: &TopicSpec) -> u32 {
        (f64::from(topic.questions) * 1.5).ceil() as u32
    }

    pub fn build_configuration(
        &self,
        class_level: ClassLevel,
        subject: Subject,
        topic_id: &str,
        difficulty: Difficulty,
    ) -> QuizResult<QuizConfiguration> {
        let topic = self
            .topic(subject, topic_id)
            .ok_or_else(|| QuizError::UnknownTopic {
                subject,
                topic: topic_id.to_string(),
            })?;

        let config = QuizConfiguration {
            class_level,
            subject,
            topic: topic.id.clone(),
            difficulty,
            estimated_questions: topic.questions,
            estimated_xp: Self::estimated_xp(topic, difficulty),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Supplies the ordered question set for a configuration.
pub trait QuestionProvider {
    fn questions_for(&self, config: &QuizConfiguration) -> Vec<Question>;
}

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionProvider for QuestionBank {
    /// Questions of the chosen topic first, then the rest of the subject,
    /// capped at the configured estimate.
    fn questions_for(&self, config: &QuizConfiguration) -> Vec<Question> {
        let in_subject = self.questions.iter().filter(|q| q.subject == config.subject);
        let (topic, others): (Vec<&Question>, Vec<&Question>) =
            in_subject.partition(|q| q.topic == config.topic);

        if topic.is_empty() {
            return Vec::new();
        }

        topic
            .into_iter()
            .chain(others)
            .take(config.estimated_questions as usize)
            .cloned()
            .collect()
    }
}

/// Loads the selection catalog from the embedded YAML.
pub fn read_catalog_embedded() -> QuizResult<Catalog> {
    let file_content = include_str!("data/catalog.yaml");
    let catalog = serde_yaml::from_str(file_content)?;
    Ok(catalog)
}

/// Loads the question bank from the embedded YAML.
pub fn read_question_bank_embedded() -> QuizResult<QuestionBank> {
    let file_content = include_str!("data/questions.yaml");
    let questions: Vec<Question> = serde_yaml::from_str(file_content)?;
    log::debug!("loaded {} questions", questions.len());
    Ok(QuestionBank::new(questions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_with_defaults() {
        let catalog = read_catalog_embedded().expect("catalog");
        assert_eq!(catalog.settings, QuizSettings::default());
        assert_eq!(catalog.classes.len(), 7);
        assert_eq!(catalog.subjects.len(), 5);
        assert_eq!(catalog.topics(Subject::Mathematics).len(), 4);
        assert!(catalog.topics(Subject::Hindi).is_empty());
        assert_eq!(catalog.topic_name("geometry"), "Geometry");
        assert_eq!(catalog.topic_name("unknown"), "unknown");
    }

    #[test]
    fn settings_fall_back_to_defaults_when_missing() {
        let settings: QuizSettings =
            serde_yaml::from_str("reveal_delay_ms: 250").expect("settings");
        assert_eq!(settings.seconds_per_question, 120);
        assert_eq!(settings.reveal_delay_ms, 250);
    }

    #[test]
    fn estimates_follow_the_difficulty_multiplier() {
        let catalog = read_catalog_embedded().expect("catalog");
        let algebra = catalog.topic(Subject::Mathematics, "algebra").expect("algebra");
        assert_eq!(Catalog::estimated_xp(algebra, Difficulty::Easy), 150);
        assert_eq!(Catalog::estimated_xp(algebra, Difficulty::Medium), 225);
        assert_eq!(Catalog::estimated_xp(algebra, Difficulty::Hard), 300);

        let mensuration = catalog.topic(Subject::Mathematics, "mensuration").expect("topic");
        assert_eq!(Catalog::estimated_minutes(mensuration), 23);
    }

    #[test]
    fn build_configuration_rejects_unknown_topics() {
        let catalog = read_catalog_embedded().expect("catalog");
        let err = catalog
            .build_configuration(ClassLevel::Class8, Subject::Science, "algebra", Difficulty::Easy)
            .unwrap_err();
        assert!(matches!(err, QuizError::UnknownTopic { .. }));

        let config = catalog
            .build_configuration(ClassLevel::Class9, Subject::Science, "physics", Difficulty::Hard)
            .expect("config");
        assert_eq!(config.estimated_questions, 22);
        assert_eq!(config.estimated_xp, 280);
    }

    #[test]
    fn provider_puts_topic_questions_first() {
        let catalog = read_catalog_embedded().expect("catalog");
        let bank = read_question_bank_embedded().expect("bank");
        let config = catalog
            .build_configuration(
                ClassLevel::Class8,
                Subject::Mathematics,
                "algebra",
                Difficulty::Medium,
            )
            .expect("config");

        let questions = bank.questions_for(&config);
        assert!(questions.iter().all(|q| q.subject == Subject::Mathematics));
        assert_eq!(questions[0].topic, "algebra");
        assert_eq!(questions[1].topic, "algebra");
        assert!(questions.len() > 2);
    }

    #[test]
    fn provider_caps_at_the_estimate() {
        let bank = read_question_bank_embedded().expect("bank");
        let config = QuizConfiguration {
            class_level: ClassLevel::Class8,
            subject: Subject::Mathematics,
            topic: "arithmetic".into(),
            difficulty: Difficulty::Easy,
            estimated_questions: 1,
            estimated_xp: 0,
        };
        assert_eq!(bank.questions_for(&config).len(), 1);
    }

    #[test]
    fn provider_returns_nothing_for_a_topic_without_questions() {
        let bank = read_question_bank_embedded().expect("bank");
        let config = QuizConfiguration {
            class_level: ClassLevel::Class6,
            subject: Subject::Hindi,
            topic: "poetry".into(),
            difficulty: Difficulty::Easy,
            estimated_questions: 10,
            estimated_xp: 0,
        };
        assert!(bank.questions_for(&config).is_empty());
    }

    #[test]
    fn every_bank_question_has_a_valid_answer() {
        let bank = read_question_bank_embedded().expect("bank");
        assert!(!bank.is_empty());
        for q in &bank.questions {
            assert!(q.option_text(&q.correct_answer).is_some(), "question {}", q.id);
        }
    }
}
