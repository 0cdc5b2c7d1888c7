use super::*;
use crate::model::Difficulty;

/// XP for a correct answer before the difficulty multiplier.
pub const XP_PER_CORRECT: u32 = 20;

/// `floor(correct × 20 × multiplier)`.
pub fn compute_xp(correct_count: usize, difficulty: Difficulty) -> u32 {
    xp_for(correct_count, difficulty, XP_PER_CORRECT)
}

pub fn xp_for(correct_count: usize, difficulty: Difficulty, xp_per_correct: u32) -> u32 {
    let raw = correct_count as f64 * f64::from(xp_per_correct) * difficulty.xp_multiplier();
    raw.floor() as u32
}

/// Rounded percentage of correct answers; 0 when nothing was answered.
pub fn accuracy(correct: usize, answered: usize) -> u32 {
    if answered == 0 {
        return 0;
    }
    (100.0 * correct as f64 / answered as f64).round() as u32
}

impl QuizSession {
    /// Closes the session and takes the results snapshot. Runs at most once
    /// per session: later calls find the phase already at results.
    pub(super) fn finalize(&mut self, timed_out: bool) {
        if !matches!(self.state.phase, QuizPhase::Active | QuizPhase::Paused) {
            return;
        }
        self.scheduler.cancel();

        let results = self.build_results(timed_out);
        self.state.phase = QuizPhase::Results;
        self.state.selected_answer = None;
        self.state.show_result = false;

        log::info!(
            "quiz {} finished: {}/{} correct, {}% accuracy, {} XP{}",
            results.session_id,
            results.correct_answers,
            results.answered,
            results.accuracy,
            results.xp_earned,
            if timed_out { " (time ran out)" } else { "" }
        );
        self.results = Some(results.clone());
        self.emit(SessionEvent::Completed(results));
    }

    fn build_results(&self, timed_out: bool) -> QuizResults {
        let answers = self.state.answers.clone();
        let correct_answers = answers.iter().filter(|a| a.is_correct).count();
        let config = self.config.clone().unwrap_or_default();

        QuizResults {
            session_id: self.session_id.clone().unwrap_or_default(),
            total_questions: self.questions.len(),
            answered: answers.len(),
            correct_answers,
            accuracy: accuracy(correct_answers, answers.len()),
            xp_earned: xp_for(correct_answers, config.difficulty, self.settings.xp_per_correct),
            time_spent_secs: self.elapsed_secs(),
            timed_out,
            config,
            answers,
        }
    }
}
