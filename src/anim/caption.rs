//! Caption rotator
//!
//! Shows one caption at a time and moves to the next one every interval,
//! wrapping around forever. It keeps its own timer and knows nothing about
//! the typewriter, so the two drift relative to each other.

use super::clock::{Millis, Timer};
use super::errors::{ConfigError, positive_interval};
use tracing::debug;

/// Cycles a fixed list of captions on a constant interval
#[derive(Debug, Clone)]
pub struct CaptionRotator {
    captions: Vec<String>,
    interval: Millis,
    fallback: String,
    active_index: usize,
    timer: Timer,
    cancelled: bool,
}

impl CaptionRotator {
    /// Build a rotator. `fallback` is shown when `captions` is empty.
    pub fn new(
        captions: Vec<String>,
        interval_ms: i64,
        fallback: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let interval = positive_interval("interval_ms", interval_ms)?;
        Ok(CaptionRotator {
            captions,
            interval,
            fallback: fallback.into(),
            active_index: 0,
            timer: Timer::idle(),
            cancelled: false,
        })
    }

    /// Schedule the first rotation. An empty list schedules nothing.
    pub fn start(&mut self, now: Millis) {
        if self.cancelled || self.timer.is_pending() {
            return;
        }
        if !self.is_enabled() {
            debug!("caption rotator has no captions, showing fallback");
            return;
        }
        self.timer.schedule(now, self.interval);
    }

    /// Apply every rotation due by `now`. Returns how many were applied.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        if self.cancelled {
            return 0;
        }
        let Some(due) = self.timer.take_if_due(now) else {
            return 0;
        };

        // intervals missed after the one at `due`
        let behind = (now - due) / self.interval;
        let rotations = behind.saturating_add(1);
        let len = self.captions.len() as Millis;
        let step = (rotations % len) as usize;
        self.active_index = (self.active_index + step) % self.captions.len();
        self.timer.schedule(due + behind * self.interval, self.interval);

        debug!(active_index = self.active_index, rotations, "caption rotated");
        usize::try_from(rotations).unwrap_or(usize::MAX)
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
        if !self.cancelled {
            debug!(active_index = self.active_index, "caption rotator cancelled");
            self.cancelled = true;
        }
    }

    /// The caption on display, or the fallback when there are none
    pub fn current(&self) -> &str {
        self.captions
            .get(self.active_index)
            .map_or(self.fallback.as_str(), String::as_str)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    pub fn is_enabled(&self) -> bool {
        !self.captions.is_empty()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timer.due()
    }
}
