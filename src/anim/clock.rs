//! Millisecond clocks and the one-shot timer slot

use std::cell::Cell;
use std::time::Instant;

/// Milliseconds since an arbitrary clock origin
pub type Millis = u64;

/// Source of the current time for the host loop
pub trait Clock {
    /// Milliseconds elapsed since this clock's origin
    fn now_ms(&self) -> Millis;
}

/// Wall clock backed by [`Instant`], with its origin at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Clock that only moves when told to. Used for simulated time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        ManualClock {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `delta` milliseconds
    pub fn advance(&self, delta: Millis) {
        self.now.set(self.now.get().saturating_add(delta));
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, now: Millis) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

/// A single pending deadline
///
/// Each animation component owns exactly one of these, so at most one
/// callback per component is ever outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    due: Option<Millis>,
}

impl Timer {
    /// A timer with nothing scheduled
    pub fn idle() -> Self {
        Timer { due: None }
    }

    /// Schedule the deadline `delay` ms after `from`, replacing any pending one.
    /// A deadline past `Millis::MAX` is never scheduled.
    pub fn schedule(&mut self, from: Millis, delay: Millis) {
        self.due = from.checked_add(delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn due(&self) -> Option<Millis> {
        self.due
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Take the deadline if it has passed at `now`, leaving the timer idle
    pub fn take_if_due(&mut self, now: Millis) -> Option<Millis> {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                Some(due)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once() {
        let mut timer = Timer::idle();
        timer.schedule(1000, 250);
        assert_eq!(timer.due(), Some(1250));

        assert_eq!(timer.take_if_due(1249), None);
        assert_eq!(timer.take_if_due(1250), Some(1250));
        assert_eq!(timer.take_if_due(5000), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_timer_reschedule_replaces_pending() {
        let mut timer = Timer::idle();
        timer.schedule(0, 100);
        timer.schedule(0, 40);
        assert_eq!(timer.due(), Some(40));
    }

    #[test]
    fn test_timer_cancel_is_idempotent() {
        let mut timer = Timer::idle();
        timer.schedule(0, 100);
        timer.cancel();
        timer.cancel();
        assert_eq!(timer.take_if_due(Millis::MAX), None);
    }

    #[test]
    fn test_timer_overflow_leaves_timer_idle() {
        let mut timer = Timer::idle();
        timer.schedule(Millis::MAX - 10, 100);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(10);
        clock.advance(90);
        assert_eq!(clock.now_ms(), 100);
        clock.set(50);
        assert_eq!(clock.now_ms(), 100);
        clock.set(400);
        assert_eq!(clock.now_ms(), 400);
    }
}
