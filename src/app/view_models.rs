use super::*;
use crate::report::{leaderboard, previous_attempts, recommendations, topic_breakdown};
use crate::view_models::ResultsView;

impl QuizApp {
    /// Everything the results screen shows. `None` outside the results phase.
    pub fn results_view(&self) -> Option<ResultsView> {
        if self.phase() != QuizPhase::Results {
            return None;
        }
        let results = self.session.results()?;

        let breakdown = topic_breakdown(self.session.questions(), &results.answers);
        let recommendations = recommendations(&breakdown, |id| self.catalog.topic_name(id));
        let breakdown = breakdown
            .into_iter()
            .map(|mut row| {
                row.topic = self.catalog.topic_name(&row.topic);
                row
            })
            .collect();

        Some(ResultsView {
            score: results.score(),
            total_questions: results.total_questions,
            accuracy: results.accuracy,
            xp_earned: results.xp_earned,
            time_spent_secs: results.time_spent_secs,
            timed_out: results.timed_out,
            breakdown,
            recommendations,
            previous_attempts: previous_attempts(&self.history, &results.session_id),
            leaderboard: leaderboard(&self.catalog.leaderboard, results),
        })
    }

    /// Header line for the running quiz, e.g. `Class 8 • Mathematics • Algebra`.
    pub fn quiz_title(&self) -> String {
        match self.session.config() {
            Some(config) => format!(
                "{} • {} • {}",
                config.class_level,
                config.subject.name(),
                self.catalog.topic_name(&config.topic)
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::QuizApp;

    #[test]
    fn results_view_only_exists_after_finishing() {
        let mut app = QuizApp::new(None).expect("embedded data loads");
        assert!(app.results_view().is_none());

        app.select_topic("algebra");
        assert!(app.start_quiz());
        assert_eq!(app.quiz_title(), "Class 8 • Mathematics • Algebra");
        assert!(app.results_view().is_none());

        let total = app.session.questions().len();
        for i in 0..total {
            let label = if i == 0 {
                "Z".to_string()
            } else {
                app.session
                    .current_question()
                    .map(|q| q.correct_answer.clone())
                    .expect("question")
            };
            app.answer(&label);
            app.next_question();
        }
        app.pump(0.0, None);

        let view = app.results_view().expect("results view");
        assert_eq!(view.score, total - 1);
        assert_eq!(view.total_questions, total);
        assert!(view.previous_attempts.is_empty());
        assert!(view.leaderboard.iter().any(|e| e.is_current_user));
        assert_eq!(view.recommendations.len(), view.breakdown.len());
    }

    #[test]
    fn earlier_attempts_show_up_on_retake() {
        let mut app = QuizApp::new(None).expect("embedded data loads");
        app.select_topic("geometry");
        assert!(app.start_quiz());
        for _ in 0..app.session.questions().len() {
            app.answer("A");
            app.next_question();
        }
        app.pump(0.0, None);
        app.retake_quiz();
        for _ in 0..app.session.questions().len() {
            app.answer("B");
            app.next_question();
        }
        app.pump(1.0, None);

        let view = app.results_view().expect("results view");
        assert_eq!(view.previous_attempts.len(), 1);
    }
}
