//! Clock port and implementations.

use std::sync::{Mutex, PoisonError};

use chrono::Duration;

use crate::value_objects::Timestamp;

/// Source of the current instant. Swappable so tests can control time.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// System clock - uses real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Fixed clock - always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl ClockPort for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Stepped clock - returns `start`, then advances by `step` on every read.
///
/// Stops advancing once the next step would leave the representable range.
#[derive(Debug)]
pub struct SteppedClock {
    next: Mutex<Timestamp>,
    step: Duration,
}

impl SteppedClock {
    pub fn new(start: Timestamp, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }
}

impl ClockPort for SteppedClock {
    fn now(&self) -> Timestamp {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let current = *next;
        *next = current.saturating_add(self.step);
        current
    }
}
