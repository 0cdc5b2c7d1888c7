use super::*;

impl QuizApp {
    pub fn answer(&mut self, option_label: &str) {
        self.session.submit_answer(option_label);
    }

    pub fn next_question(&mut self) {
        self.session.advance_question();
    }

    pub fn pause_quiz(&mut self) {
        self.session.pause();
    }

    pub fn resume_quiz(&mut self) {
        if self.session.resume() {
            // time spent in the pause menu is not quiz time
            self.last_frame = None;
        }
    }

    /// First click asks for confirmation; the UI calls [`Self::confirm_exit_quiz`].
    pub fn request_exit(&mut self) {
        if matches!(self.phase(), QuizPhase::Active | QuizPhase::Paused) {
            self.confirm_exit = true;
        }
    }

    pub fn cancel_exit(&mut self) {
        self.confirm_exit = false;
    }

    pub fn confirm_exit_quiz(&mut self) {
        self.confirm_exit = false;
        if self.session.exit() {
            self.streak_toast = None;
            self.message.clear();
        }
    }

    pub fn retake_quiz(&mut self) {
        if self.session.retake() {
            self.last_frame = None;
            self.streak_toast = None;
        }
    }

    /// Back to the selector, keeping the previous selection.
    pub fn new_quiz(&mut self) {
        if self.session.new_session() {
            self.streak_toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::QuizApp;
    use crate::model::QuizPhase;

    fn running_app() -> QuizApp {
        let mut app = QuizApp::new(None).expect("embedded data loads");
        app.select_topic("algebra");
        assert!(app.start_quiz());
        app
    }

    fn correct_label(app: &QuizApp) -> String {
        app.session
            .current_question()
            .map(|q| q.correct_answer.clone())
            .expect("a question is showing")
    }

    #[test]
    fn exit_needs_confirmation() {
        let mut app = running_app();
        app.request_exit();
        assert!(app.confirm_exit);
        assert_eq!(app.phase(), QuizPhase::Active);

        app.cancel_exit();
        assert!(!app.confirm_exit);
        assert_eq!(app.phase(), QuizPhase::Active);

        app.request_exit();
        app.confirm_exit_quiz();
        assert_eq!(app.phase(), QuizPhase::Selection);
        assert!(app.session.results().is_none());
        assert_eq!(app.selection.topic.as_deref(), Some("algebra"));
    }

    #[test]
    fn exit_is_not_offered_outside_a_session() {
        let mut app = QuizApp::new(None).expect("embedded data loads");
        app.request_exit();
        assert!(!app.confirm_exit);
    }

    #[test]
    fn pause_and_resume_round_trip() {
        let mut app = running_app();
        app.pause_quiz();
        assert_eq!(app.phase(), QuizPhase::Paused);
        app.resume_quiz();
        assert_eq!(app.phase(), QuizPhase::Active);
    }

    #[test]
    fn answering_every_question_reaches_results() {
        let mut app = running_app();
        let total = app.session.questions().len();
        for _ in 0..total {
            let label = correct_label(&app);
            app.answer(&label);
            app.next_question();
        }
        assert_eq!(app.phase(), QuizPhase::Results);
        let results = app.session.results().expect("results");
        assert_eq!(results.correct_answers, total);
        assert_eq!(results.accuracy, 100);

        app.retake_quiz();
        assert_eq!(app.phase(), QuizPhase::Active);
        assert!(app.session.answers().is_empty());
    }

    #[test]
    fn new_quiz_returns_to_selection() {
        let mut app = running_app();
        let total = app.session.questions().len();
        for _ in 0..total {
            app.answer("D");
            app.next_question();
        }
        app.new_quiz();
        assert_eq!(app.phase(), QuizPhase::Selection);
        assert!(app.session.config().is_none());
    }
}
