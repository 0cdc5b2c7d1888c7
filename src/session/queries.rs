use super::*;

impl QuizSession {
    pub fn phase(&self) -> QuizPhase {
        self.state.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> Option<&QuizConfiguration> {
        self.config.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn question_index(&self) -> usize {
        self.state.current_question
    }

    /// The question on screen, only while a session runs.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state.phase {
            QuizPhase::Active | QuizPhase::Paused => {
                self.questions.get(self.state.current_question)
            }
            _ => None,
        }
    }

    /// 1-based position and total, for "Question 3 of 5".
    pub fn question_position(&self) -> (usize, usize) {
        (self.state.current_question + 1, self.questions.len())
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_question + 1 >= self.questions.len()
    }

    pub fn time_remaining(&self) -> u32 {
        self.state.time_remaining
    }

    /// Full time budget of the configured quiz, in seconds.
    pub fn total_time(&self) -> u32 {
        self.config
            .as_ref()
            .map(|c| c.estimated_questions.saturating_mul(self.settings.seconds_per_question))
            .unwrap_or(0)
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.total_time().saturating_sub(self.state.time_remaining)
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.state.selected_answer.as_deref()
    }

    pub fn is_revealed(&self) -> bool {
        self.state.show_result
    }

    pub fn has_answered_current(&self) -> bool {
        self.state.answers.len() == self.state.current_question + 1
    }

    pub fn streak(&self) -> u32 {
        self.state.streak
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.state.answers
    }

    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    pub fn is_timer_running(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// How long until the scheduler next has work, so a frame loop can sleep.
    pub fn next_timer_due(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
