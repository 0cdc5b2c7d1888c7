use super::*;

impl QuizApp {
    /// Once per frame: feeds the time since the last frame into the session
    /// clock and reacts to whatever the session reported. `now` is in seconds
    /// on any monotonic clock. Finished sessions are written to the history
    /// and, when given, to `external`.
    pub fn pump(&mut self, now: f64, mut external: Option<&mut (dyn ResultStore + '_)>) {
        if self.session.is_timer_running() {
            if let Some(last) = self.last_frame {
                let elapsed = (now - last).max(0.0);
                self.session.advance_clock(Duration::from_secs_f64(elapsed));
            }
            self.last_frame = Some(now);
        } else {
            self.last_frame = None;
        }

        if self
            .streak_toast
            .as_ref()
            .is_some_and(|toast| now >= toast.expires_at)
        {
            self.streak_toast = None;
        }

        for event in self.session.drain_events() {
            match event {
                SessionEvent::Streak(n) => {
                    self.streak_toast = Some(StreakToast {
                        message: format!("{n} in a row! 🔥"),
                        expires_at: now + STREAK_TOAST_SECS,
                    });
                }
                SessionEvent::TimeExpired => {
                    self.message = "⏰ Time's up!".into();
                }
                SessionEvent::Completed(results) => {
                    self.streak_toast = None;
                    self.store_results(&results, external.as_deref_mut());
                }
                SessionEvent::Started { .. } => {
                    self.message.clear();
                }
                SessionEvent::Exited => {
                    self.last_frame = None;
                }
                SessionEvent::AnswerRevealed { .. }
                | SessionEvent::Paused
                | SessionEvent::Resumed => {}
            }
        }
    }

    fn store_results(
        &mut self,
        results: &QuizResults,
        external: Option<&mut (dyn ResultStore + '_)>,
    ) {
        if let Err(e) = self.history.persist(&results.session_id, results) {
            log::warn!("could not record {} in history: {e}", results.session_id);
        }
        if let Some(store) = external {
            match store.persist(&results.session_id, results) {
                Ok(()) => log::debug!("stored results of {}", results.session_id),
                Err(e) => log::warn!("could not store results of {}: {e}", results.session_id),
            }
        }
    }
}
