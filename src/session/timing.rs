use super::*;

impl QuizSession {
    /// One second of quiz time. Reaching zero finishes the quiz with whatever
    /// answers exist.
    pub fn tick(&mut self) -> bool {
        if self.state.phase != QuizPhase::Active {
            return self.ignored("tick");
        }
        self.state.time_remaining = self.state.time_remaining.saturating_sub(1);
        if self.state.time_remaining == 0 {
            log::info!("time is up on question {}", self.state.current_question + 1);
            self.emit(SessionEvent::TimeExpired);
            self.finalize(true);
        }
        true
    }

    /// Feeds wall-clock (or virtual) time into the scheduler and runs every
    /// callback that comes due, in order.
    pub fn advance_clock(&mut self, elapsed: Duration) {
        let mut left = elapsed;
        loop {
            let step = match self.scheduler.next_due_in() {
                Some(due) if due <= left => due,
                _ => {
                    self.scheduler.advance(left);
                    return;
                }
            };
            left -= step;
            for (handle, event) in self.scheduler.advance(step) {
                self.on_timer(handle, event);
            }
        }
    }

    fn on_timer(&mut self, handle: TimerHandle, event: TimerEvent) {
        if !self.scheduler.is_current(handle) {
            log::debug!("dropping stale {event:?} from generation {}", handle.generation());
            return;
        }
        match event {
            TimerEvent::Tick => {
                self.tick();
                if self.state.phase == QuizPhase::Active {
                    self.scheduler.schedule(self.tick_interval(), TimerEvent::Tick);
                }
            }
            TimerEvent::Reveal(question_index) => self.reveal(question_index),
        }
    }

    pub(super) fn arm_timer(&mut self) {
        self.scheduler.arm();
        self.scheduler.schedule(self.tick_interval(), TimerEvent::Tick);
    }

    pub(super) fn schedule_reveal(&mut self) {
        let delay = Duration::from_millis(self.settings.reveal_delay_ms);
        self.scheduler
            .schedule(delay, TimerEvent::Reveal(self.state.current_question));
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.settings.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::model::Difficulty;

    fn started(estimated: u32) -> QuizSession {
        let mut session = QuizSession::default();
        session
            .start(config(estimated, Difficulty::Easy), questions())
            .expect("start");
        session
    }

    #[test]
    fn clock_ticks_once_per_second() {
        let mut session = started(5);
        session.advance_clock(Duration::from_millis(999));
        assert_eq!(session.time_remaining(), 600);
        session.advance_clock(Duration::from_millis(1));
        assert_eq!(session.time_remaining(), 599);
        session.advance_clock(Duration::from_secs(10));
        assert_eq!(session.time_remaining(), 589);
    }

    #[test]
    fn partial_seconds_accumulate() {
        let mut session = started(5);
        for _ in 0..20 {
            session.advance_clock(Duration::from_millis(250));
        }
        assert_eq!(session.time_remaining(), 595);
    }

    #[test]
    fn clock_runs_out_and_finishes_the_quiz() {
        let mut session = started(1);
        session.advance_clock(Duration::from_secs(500));
        assert_eq!(session.phase(), QuizPhase::Results);
        assert_eq!(session.time_remaining(), 0);
        assert!(!session.is_timer_running());
        assert!(session.results().is_some_and(|r| r.timed_out));
    }

    #[test]
    fn ticks_stop_while_paused() {
        let mut session = started(5);
        session.advance_clock(Duration::from_secs(3));
        session.pause();
        session.advance_clock(Duration::from_secs(60));
        session.resume();
        session.advance_clock(Duration::from_secs(2));
        assert_eq!(session.time_remaining(), 595);
    }

    #[test]
    fn previous_session_callbacks_are_ignored() {
        let mut session = started(1);
        let stale = session.scheduler.current();
        session.exit();
        session
            .start(config(1, Difficulty::Easy), questions())
            .expect("restart");

        session.on_timer(stale, TimerEvent::Tick);
        assert_eq!(session.time_remaining(), 120);

        let live = session.scheduler.current();
        session.on_timer(live, TimerEvent::Tick);
        assert_eq!(session.time_remaining(), 119);
    }

    #[test]
    fn manual_tick_outside_a_session_is_ignored() {
        let mut session = QuizSession::default();
        assert!(!session.tick());
        assert_eq!(session.time_remaining(), 0);
        assert_eq!(session.phase(), QuizPhase::Selection);
    }

    #[test]
    fn next_timer_due_reports_the_pending_tick() {
        let mut session = started(5);
        assert_eq!(session.next_timer_due(), Some(Duration::from_secs(1)));
        session.pause();
        assert_eq!(session.next_timer_due(), None);
    }
}
