//! Trailing-edge debounce for coalescing bursts of updates.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Holds the latest value of a burst until `delay` has passed without a new one.
///
/// Each [`push`](Self::push) replaces the pending value and restarts the timer.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `value`, dropping any value still waiting.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending value fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }
}
