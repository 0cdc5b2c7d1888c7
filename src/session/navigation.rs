use super::*;

impl QuizSession {
    /// Begins a new session. Allowed from selection and from the results of a
    /// previous session; rejected while one is running or paused.
    pub fn start(&mut self, config: QuizConfiguration, questions: Vec<Question>) -> QuizResult<()> {
        if matches!(self.state.phase, QuizPhase::Active | QuizPhase::Paused) {
            return Err(QuizError::InvalidTransition {
                phase: self.state.phase,
                action: "start",
            });
        }
        config.validate()?;
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        if config
            .estimated_questions
            .saturating_mul(self.settings.seconds_per_question)
            == 0
        {
            return Err(QuizError::InvalidConfiguration(
                "the quiz would have no time at all".into(),
            ));
        }

        log::info!(
            "starting {} quiz on {}/{} with {} questions",
            config.difficulty,
            config.subject,
            config.topic,
            questions.len()
        );
        self.config = Some(config);
        self.questions = questions;
        self.begin_round();
        Ok(())
    }

    /// Freezes the clock. Only meaningful while active.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != QuizPhase::Active {
            return self.ignored("pause");
        }
        self.scheduler.cancel();
        self.state.phase = QuizPhase::Paused;
        self.emit(SessionEvent::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.phase != QuizPhase::Paused {
            return self.ignored("resume");
        }
        self.state.phase = QuizPhase::Active;
        self.arm_timer();
        // a reveal cut short by the pause still has to happen
        if self.state.selected_answer.is_some() && !self.state.show_result {
            self.schedule_reveal();
        }
        self.emit(SessionEvent::Resumed);
        true
    }

    /// Abandons the running session without computing results.
    pub fn exit(&mut self) -> bool {
        if !matches!(self.state.phase, QuizPhase::Active | QuizPhase::Paused) {
            return self.ignored("exit");
        }
        log::info!(
            "quiz {} abandoned at question {}",
            self.session_id.as_deref().unwrap_or("-"),
            self.state.current_question + 1
        );
        self.clear();
        self.emit(SessionEvent::Exited);
        true
    }

    /// Runs the same configuration and questions again.
    pub fn retake(&mut self) -> bool {
        if self.state.phase != QuizPhase::Results || self.config.is_none() {
            return self.ignored("retake");
        }
        self.begin_round();
        true
    }

    /// Drops the finished session and goes back to selection.
    pub fn new_session(&mut self) -> bool {
        if self.state.phase != QuizPhase::Results {
            return self.ignored("new session");
        }
        self.clear();
        true
    }

    fn begin_round(&mut self) {
        self.sessions_started += 1;
        let session_id = format!("quiz-{:04}", self.sessions_started);
        self.session_id = Some(session_id.clone());
        self.results = None;
        self.state = SessionState {
            phase: QuizPhase::Active,
            time_remaining: self.total_time(),
            ..SessionState::default()
        };
        self.arm_timer();
        self.emit(SessionEvent::Started { session_id });
    }

    fn clear(&mut self) {
        self.scheduler.cancel();
        self.state = SessionState::default();
        self.config = None;
        self.questions.clear();
        self.session_id = None;
        self.results = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::model::Difficulty;

    fn started() -> QuizSession {
        let mut session = QuizSession::default();
        session
            .start(config(5, Difficulty::Medium), questions())
            .expect("start");
        session
    }

    #[test]
    fn start_sizes_the_timer_from_the_estimate() {
        let session = started();
        assert_eq!(session.phase(), QuizPhase::Active);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.time_remaining(), 600);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn start_is_rejected_while_running_or_paused() {
        let mut session = started();
        let err = session
            .start(config(3, Difficulty::Easy), questions())
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidTransition {
                phase: QuizPhase::Active,
                ..
            }
        ));

        session.pause();
        assert!(session.start(config(3, Difficulty::Easy), questions()).is_err());
        assert_eq!(session.config().map(|c| c.estimated_questions), Some(5));
    }

    #[test]
    fn pause_and_resume_leave_progress_alone() {
        let mut session = started();
        session.submit_answer("B");
        session.tick();
        let before = (session.time_remaining(), session.question_index(), session.answers().len());

        assert!(session.pause());
        assert_eq!(session.phase(), QuizPhase::Paused);
        assert!(!session.pause());
        assert!(!session.tick());
        session.advance_clock(Duration::from_secs(30));
        assert_eq!(session.time_remaining(), before.0);

        assert!(session.resume());
        assert!(!session.resume());
        assert_eq!(session.phase(), QuizPhase::Active);
        assert_eq!(
            (session.time_remaining(), session.question_index(), session.answers().len()),
            before
        );
    }

    #[test]
    fn paused_session_ignores_answers_and_advances() {
        let mut session = started();
        session.pause();
        assert!(!session.submit_answer("B"));
        assert!(!session.advance_question());
        assert!(session.answers().is_empty());
    }

    #[test]
    fn resume_finishes_an_interrupted_reveal() {
        let mut session = started();
        session.submit_answer("B");
        session.advance_clock(Duration::from_millis(200));
        session.pause();
        assert!(!session.is_revealed());

        session.resume();
        session.advance_clock(Duration::from_millis(500));
        assert!(session.is_revealed());
    }

    #[test]
    fn exit_drops_everything_without_results() {
        let mut session = started();
        session.submit_answer("B");
        assert!(session.exit());
        assert_eq!(session.phase(), QuizPhase::Selection);
        assert!(session.results().is_none());
        assert!(session.config().is_none());
        assert!(session.current_question().is_none());
        assert!(!session.is_timer_running());
        assert!(!session.exit());
        assert_eq!(session.drain_events().last(), Some(&SessionEvent::Exited));
    }

    #[test]
    fn exit_works_from_pause() {
        let mut session = started();
        session.pause();
        assert!(session.exit());
        assert_eq!(session.phase(), QuizPhase::Selection);
    }

    #[test]
    fn retake_restarts_with_the_same_configuration() {
        let mut session = started();
        session.submit_answer("A");
        for _ in 0..600 {
            session.tick();
        }
        assert_eq!(session.phase(), QuizPhase::Results);

        assert!(session.retake());
        assert_eq!(session.phase(), QuizPhase::Active);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.time_remaining(), 600);
        assert!(session.answers().is_empty());
        assert_eq!(session.streak(), 0);
        assert!(session.results().is_none());
        assert_eq!(session.questions().len(), 5);
        assert!(session.is_timer_running());
    }

    #[test]
    fn retake_and_new_session_need_results() {
        let mut session = started();
        assert!(!session.retake());
        assert!(!session.new_session());
        assert_eq!(session.phase(), QuizPhase::Active);
    }

    #[test]
    fn new_session_returns_to_selection() {
        let mut session = started();
        for label in CORRECT {
            session.submit_answer(label);
            session.advance_question();
        }
        assert!(session.new_session());
        assert_eq!(session.phase(), QuizPhase::Selection);
        assert!(session.config().is_none());
        assert!(session.results().is_none());
        assert!(session.answers().is_empty());
    }

    #[test]
    fn start_is_allowed_from_results() {
        let mut session = started();
        for _ in 0..600 {
            session.tick();
        }
        session
            .start(config(2, Difficulty::Hard), questions())
            .expect("restart");
        assert_eq!(session.time_remaining(), 240);
    }
}
