use super::*;
use crate::view_models::{DifficultyInfo, QuizSummary, TopicInfo};

impl QuizApp {
    pub fn select_class(&mut self, class_level: ClassLevel) {
        self.selection.class_level = class_level;
    }

    /// A topic only makes sense within its subject, so switching subjects
    /// clears it.
    pub fn select_subject(&mut self, subject: Subject) {
        if self.selection.subject != subject {
            self.selection.subject = subject;
            self.selection.topic = None;
        }
    }

    pub fn select_topic(&mut self, topic_id: &str) {
        if self.catalog.topic(self.selection.subject, topic_id).is_some() {
            self.selection.topic = Some(topic_id.to_string());
        } else {
            log::warn!(
                "topic `{topic_id}` is not part of {}",
                self.selection.subject.name()
            );
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.selection.difficulty = difficulty;
    }

    pub fn topic_infos(&self) -> Vec<TopicInfo> {
        self.catalog
            .topics(self.selection.subject)
            .iter()
            .map(|t| TopicInfo {
                id: t.id.clone(),
                name: t.name.clone(),
                questions: t.questions,
                xp: t.xp,
                selected: self.selection.topic.as_deref() == Some(t.id.as_str()),
            })
            .collect()
    }

    pub fn difficulty_infos(&self) -> Vec<DifficultyInfo> {
        self.catalog
            .difficulties
            .iter()
            .map(|d| DifficultyInfo {
                difficulty: d.id,
                description: d.description.clone(),
                selected: d.id == self.selection.difficulty,
            })
            .collect()
    }

    /// `None` until a topic is picked.
    pub fn quiz_summary(&self) -> Option<QuizSummary> {
        let topic_id = self.selection.topic.as_deref()?;
        let topic = self.catalog.topic(self.selection.subject, topic_id)?;
        Some(QuizSummary {
            path: format!(
                "{} • {} • {}",
                self.selection.class_level,
                self.selection.subject.name(),
                topic.name
            ),
            difficulty: self.selection.difficulty,
            questions: topic.questions,
            estimated_minutes: Catalog::estimated_minutes(topic),
            estimated_xp: Catalog::estimated_xp(topic, self.selection.difficulty),
        })
    }

    pub fn can_start(&self) -> bool {
        self.quiz_summary().is_some()
    }

    /// Hands the current selection to the engine. Failures land in `message`.
    pub fn start_quiz(&mut self) -> bool {
        match self.try_start_quiz() {
            Ok(()) => {
                self.message.clear();
                self.last_frame = None;
                true
            }
            Err(e) => {
                log::warn!("could not start quiz: {e}");
                self.message = format!("⚠ {e}");
                false
            }
        }
    }

    fn try_start_quiz(&mut self) -> QuizResult<()> {
        let topic_id = self
            .selection
            .topic
            .clone()
            .ok_or_else(|| QuizError::InvalidConfiguration("no topic selected".into()))?;
        let config = self.catalog.build_configuration(
            self.selection.class_level,
            self.selection.subject,
            &topic_id,
            self.selection.difficulty,
        )?;
        let questions = self.bank.questions_for(&config);
        self.session.start(config, questions)
    }
}
