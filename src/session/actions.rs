use super::*;

impl QuizSession {
    /// Records the answer for the current question. A second answer for the
    /// same question is ignored.
    pub fn submit_answer(&mut self, option_label: &str) -> bool {
        if self.state.phase != QuizPhase::Active {
            return self.ignored("submit answer");
        }
        if self.state.selected_answer.is_some() {
            return self.ignored("submit a second answer");
        }
        let Some(question) = self.questions.get(self.state.current_question) else {
            return self.ignored("submit answer without a question");
        };

        let is_correct = question.is_correct(option_label);
        let record = AnswerRecord {
            question_id: question.id,
            selected_answer: option_label.to_string(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
            time_spent_secs: self.elapsed_secs(),
        };
        log::debug!(
            "question {} answered {} ({})",
            record.question_id,
            record.selected_answer,
            if is_correct { "correct" } else { "wrong" }
        );

        self.state.answers.push(record);
        self.state.selected_answer = Some(option_label.to_string());
        self.state.show_result = false;
        if is_correct {
            self.state.streak += 1;
            if self.state.streak > 1 {
                self.emit(SessionEvent::Streak(self.state.streak));
            }
        } else {
            self.state.streak = 0;
        }

        self.schedule_reveal();
        true
    }

    /// Moves past an answered question, finishing the quiz after the last one.
    pub fn advance_question(&mut self) -> bool {
        if self.state.phase != QuizPhase::Active {
            return self.ignored("advance");
        }
        if !self.has_answered_current() {
            return self.ignored("advance without an answer");
        }

        // an answer skipped past before its delay still gets revealed
        self.reveal(self.state.current_question);

        if self.state.current_question + 1 >= self.questions.len() {
            self.finalize(false);
        } else {
            self.state.current_question += 1;
            self.state.selected_answer = None;
            self.state.show_result = false;
        }
        true
    }

    /// Shows whether the pending answer was right. Runs at most once per
    /// answer; reveals for a question the user already moved past are dropped.
    pub(super) fn reveal(&mut self, question_index: usize) {
        if self.state.phase != QuizPhase::Active
            || question_index != self.state.current_question
            || self.state.selected_answer.is_none()
            || self.state.show_result
        {
            return;
        }
        self.state.show_result = true;

        let correct = self
            .state
            .answers
            .last()
            .map(|a| a.is_correct)
            .unwrap_or(false);
        self.emit(SessionEvent::AnswerRevealed { correct });
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
    fn answer_is_recorded_with_elapsed_time() {
        let mut session = started();
        for _ in 0..42 {
            session.tick();
        }
        assert!(session.submit_answer("B"));

        let record = &session.answers()[0];
        assert_eq!(record.question_id, 1);
        assert_eq!(record.selected_answer, "B");
        assert_eq!(record.correct_answer, "B");
        assert!(record.is_correct);
        assert_eq!(record.time_spent_secs, 42);
        assert_eq!(session.selected_answer(), Some("B"));
        assert!(!session.is_revealed());
    }

    #[test]
    fn streak_follows_consecutive_correct_answers() {
        let mut session = started();
        let mut seen = Vec::new();
        for label in ["B", "B", WRONG, "A"] {
            session.submit_answer(label);
            seen.push(session.streak());
            session.advance_question();
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn advance_needs_an_answer() {
        let mut session = started();
        assert!(!session.advance_question());
        assert_eq!(session.question_index(), 0);

        session.submit_answer(WRONG);
        assert!(session.advance_question());
        assert_eq!(session.question_index(), 1);
        assert_eq!(session.selected_answer(), None);
        assert!(!session.is_revealed());
        assert!(!session.advance_question());
    }

    #[test]
    fn last_question_goes_straight_to_results() {
        let mut session = started();
        for label in &CORRECT[..4] {
            session.submit_answer(label);
            session.advance_question();
        }
        assert_eq!(session.question_index(), 4);
        session.submit_answer(CORRECT[4]);
        assert!(session.advance_question());

        assert_eq!(session.phase(), QuizPhase::Results);
        assert_eq!(session.question_index(), 4);
        let results = session.results().expect("results");
        assert_eq!(results.correct_answers, 5);
        assert_eq!(results.accuracy, 100);
        assert_eq!(results.xp_earned, 150);
    }

    #[test]
    fn reveal_arrives_after_the_delay() {
        let mut session = started();
        session.submit_answer(WRONG);
        session.advance_clock(Duration::from_millis(499));
        assert!(!session.is_revealed());
        session.advance_clock(Duration::from_millis(1));
        assert!(session.is_revealed());
        assert_eq!(
            session.drain_events().last(),
            Some(&SessionEvent::AnswerRevealed { correct: false })
        );
    }

    #[test]
    fn stale_reveal_does_not_leak_into_the_next_question() {
        let mut session = started();
        session.submit_answer("B");
        session.advance_question();
        session.advance_clock(Duration::from_millis(300));
        session.submit_answer("B");
        // first reveal comes due now, for a question already left behind
        session.advance_clock(Duration::from_millis(250));
        assert!(!session.is_revealed());
        session.advance_clock(Duration::from_millis(250));
        assert!(session.is_revealed());
    }

    #[test]
    fn single_correct_answer_has_no_streak_notice() {
        let mut session = started();
        session.submit_answer("B");
        session.advance_clock(Duration::from_millis(500));
        let events = session.drain_events();
        assert!(!events.iter().any(|e| matches!(e, SessionEvent::Streak(_))));
    }

    #[test]
    fn quick_advances_keep_the_streak_notices() {
        let mut session = started();
        for label in ["B", "B", "C"] {
            session.submit_answer(label);
            session.advance_question();
        }
        session.advance_clock(Duration::from_millis(600));

        let streaks: Vec<u32> = session
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                SessionEvent::Streak(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(streaks, vec![2, 3]);
    }

    #[test]
    fn advancing_reveals_the_pending_answer_once() {
        let mut session = started();
        session.submit_answer(WRONG);
        session.advance_question();
        session.advance_clock(Duration::from_millis(600));

        let reveals = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, SessionEvent::AnswerRevealed { .. }))
            .count();
        assert_eq!(reveals, 1);
    }
}
