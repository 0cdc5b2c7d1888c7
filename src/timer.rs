// src/timer.rs

//! Deterministic, cancellable callback scheduler.
//!
//! The scheduler owns a virtual clock that only moves when [`Scheduler::advance`]
//! is called. Every callback is tagged with the generation that was current
//! when it was scheduled; arming or cancelling bumps the generation, so
//! callbacks from an earlier session or pause cycle can never fire.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
}

impl TimerHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second of quiz time has passed.
    Tick,
    /// The correctness of the answer to the question at this index may be shown.
    Reveal(usize),
}

#[derive(Clone, Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    handle: TimerHandle,
    event: TimerEvent,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    armed: bool,
    now: Duration,
    next_seq: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh generation. Previously issued handles go stale and
    /// their pending callbacks are dropped.
    pub fn arm(&mut self) -> TimerHandle {
        self.generation += 1;
        self.armed = true;
        self.pending.clear();
        self.current()
    }

    pub fn cancel(&mut self) {
        if self.armed {
            log::debug!("timer generation {} cancelled", self.generation);
        }
        self.generation += 1;
        self.armed = false;
        self.pending.clear();
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn current(&self) -> TimerHandle {
        TimerHandle {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.armed && handle.generation == self.generation
    }

    /// Queues `event` under the current generation. Returns `None` when the
    /// scheduler is not armed.
    pub fn schedule(&mut self, delay: Duration, event: TimerEvent) -> Option<TimerHandle> {
        if !self.armed {
            return None;
        }
        let handle = self.current();
        self.pending.push(Scheduled {
            due: self.now + delay,
            seq: self.next_seq,
            handle,
            event,
        });
        self.next_seq += 1;
        Some(handle)
    }

    /// Moves the clock forward by `elapsed` and hands back every callback that
    /// came due, oldest first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerHandle, TimerEvent)> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, rest): (Vec<Scheduled>, Vec<Scheduled>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;

        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| (s.handle, s.event)).collect()
    }

    /// Time until the next pending callback, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|s| s.due.saturating_sub(self.now))
            .min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
