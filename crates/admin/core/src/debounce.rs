use std::time::{Duration, Instant};

pub const SEARCH_DELAY: Duration = Duration::from_millis(300);
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);

/// Trailing-edge debouncer. Every `poke` cancels the pending window and
/// starts a new one; the action runs when the window elapses with no further
/// pokes. Deadline-based so the driving shell only has to poll `fire`.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    pub fn poke(&mut self) {
        self.poke_at(Instant::now());
    }

    pub fn poke_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drops the pending window, e.g. on teardown.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per elapsed window; disarms itself on firing.
    pub fn fire(&mut self) -> bool {
        self.fire_at(Instant::now())
    }

    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending window elapses, for shells that sleep
    /// instead of polling.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}
