//! Call-rate policies: debounce and throttle.
//!
//! These are pure state machines over millisecond timestamps. The browser
//! crate owns the actual timers and feeds wall-clock time in.

use serde::{Deserialize, Serialize};

/// Debounce policy: each call pushes the fire deadline `wait_ms` into the
/// future; the wrapped action runs only once the calls stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    /// Create a debounce with the given quiet period.
    #[must_use]
    pub const fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// Record a call at `now_ms`. Returns the deadline at which the action
    /// should fire if no further calls arrive.
    pub fn on_call(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.wait_ms;
        self.deadline = Some(deadline);
        deadline
    }

    /// Whether the pending action should fire at `now_ms`. Firing consumes
    /// the deadline.
    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The currently pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<f64> {
        self.deadline
    }
}

/// Throttle policy: the first call passes immediately, further calls are
/// suppressed until `limit_ms` has elapsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throttle {
    limit_ms: f64,
    open_at: f64,
}

impl Throttle {
    /// Create a throttle with the given minimum interval.
    #[must_use]
    pub const fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            open_at: f64::NEG_INFINITY,
        }
    }

    /// Record a call at `now_ms`; returns whether the action should run.
    pub fn on_call(&mut self, now_ms: f64) -> bool {
        if now_ms >= self.open_at {
            self.open_at = now_ms + self.limit_ms;
            true
        } else {
            false
        }
    }
}
