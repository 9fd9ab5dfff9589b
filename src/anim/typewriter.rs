//! Typewriter engine
//!
//! Cycles through a [`PhraseList`], typing each phrase one character per
//! tick, pausing once it is complete, deleting it one character per tick and
//! then moving on to the next phrase. The cycle never ends on its own; it
//! stops only when the engine is cancelled.
//!
//! # State Machine
//!
//! ```text
//!            phrase complete              pause elapsed
//!   Typing ───────────────────▶ Waiting ───────────────▶ Deleting
//!     ▲                                                     │
//!     └──────── text empty: active_index = (i + 1) % len ───┘
//! ```
//!
//! Transitions that complete a phrase (last character typed, last character
//! deleted) happen inside the tick that caused them, so an empty phrase goes
//! straight from `Typing` to `Waiting` and the pause is the only time it
//! consumes.
//!
//! Character counts are in `char`s, never bytes, so multi-byte text is never
//! cut in the middle of a code point.
//!
//! One full cycle over every phrase always returns the engine to the same
//! state, so an `advance_to` that is whole cycles late skips them without
//! replaying each tick.

use super::clock::{Millis, Timer};
use super::errors::{ConfigError, positive_interval};
use tracing::{debug, trace, warn};

pub const DEFAULT_TYPING_INTERVAL_MS: i64 = 100;
pub const DEFAULT_DELETING_INTERVAL_MS: i64 = 50;
pub const DEFAULT_PAUSE_MS: i64 = 2000;
pub const DEFAULT_IDLE_TEXT: &str = "Loading...";

/// Ordered phrases typed by one engine. Fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PhraseList {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Length of the phrase at `index` in chars (0 when out of range)
    pub fn char_len(&self, index: usize) -> usize {
        self.get(index).map_or(0, |p| p.chars().count())
    }
}

impl<S: Into<String>> FromIterator<S> for PhraseList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PhraseList::new(iter)
    }
}

/// Timing and fallback settings for a [`Typewriter`]
///
/// Intervals are signed so that negative values coming from a config file
/// reach validation instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub typing_interval_ms: i64,
    pub deleting_interval_ms: i64,
    pub pause_ms: i64,
    /// Shown instead of the typed text when there are no phrases
    pub idle_text: String,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        TypewriterConfig {
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            deleting_interval_ms: DEFAULT_DELETING_INTERVAL_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            idle_text: DEFAULT_IDLE_TEXT.to_string(),
        }
    }
}

/// What the engine is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Waiting,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Constructed,
    Running,
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
struct Timings {
    typing: Millis,
    deleting: Millis,
    pause: Millis,
}

/// Read-only snapshot of the engine's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterView<'a> {
    pub text: &'a str,
    pub active_index: usize,
    pub mode: Mode,
}

/// The typewriter state machine
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: PhraseList,
    timings: Timings,
    idle_text: String,

    active_index: usize,
    /// Always a prefix of the active phrase
    text: String,
    /// Number of chars in `text`
    typed: usize,
    mode: Mode,

    timer: Timer,
    lifecycle: Lifecycle,
}

impl Typewriter {
    /// Build an engine. Nothing is scheduled until [`Typewriter::start`].
    pub fn new(phrases: PhraseList, config: TypewriterConfig) -> Result<Self, ConfigError> {
        let timings = Timings {
            typing: positive_interval("typing_interval_ms", config.typing_interval_ms)?,
            deleting: positive_interval("deleting_interval_ms", config.deleting_interval_ms)?,
            pause: positive_interval("pause_ms", config.pause_ms)?,
        };

        Ok(Typewriter {
            phrases,
            timings,
            idle_text: config.idle_text,
            active_index: 0,
            text: String::new(),
            typed: 0,
            mode: Mode::Typing,
            timer: Timer::idle(),
            lifecycle: Lifecycle::Constructed,
        })
    }

    /// Start the cycle at `now`. An engine starts at most once.
    pub fn start(&mut self, now: Millis) {
        if self.lifecycle != Lifecycle::Constructed {
            warn!(lifecycle = ?self.lifecycle, "typewriter already started, ignoring start");
            return;
        }
        self.lifecycle = Lifecycle::Running;

        if self.phrases.is_empty() {
            debug!("typewriter has no phrases, staying idle");
            return;
        }

        debug!(phrases = self.phrases.len(), now, "typewriter started");
        self.enter_typing(now);
    }

    /// Fire every deadline that has passed at `now`, in order.
    ///
    /// Returns the number of state changes applied; zero means the host has
    /// nothing new to render.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        if self.lifecycle != Lifecycle::Running {
            return 0;
        }

        let mut changes = self.skip_whole_cycles(now);
        while let Some(due) = self.timer.take_if_due(now) {
            self.fire(due);
            changes += 1;
        }
        changes
    }

    /// Drop any pending deadline. Further calls to `advance_to` do nothing.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        if self.lifecycle != Lifecycle::Cancelled {
            debug!(active_index = self.active_index, "typewriter cancelled");
            self.lifecycle = Lifecycle::Cancelled;
        }
    }

    /// The typed prefix of the active phrase
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text for the host to render: the typed prefix, or the idle text when
    /// there is nothing to type
    pub fn display_text(&self) -> &str {
        if self.is_idle() {
            &self.idle_text
        } else {
            &self.text
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn view(&self) -> TypewriterView<'_> {
        TypewriterView {
            text: &self.text,
            active_index: self.active_index,
            mode: self.mode,
        }
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn current_phrase(&self) -> Option<&str> {
        self.phrases.get(self.active_index)
    }

    /// Deadline of the pending tick, if one is scheduled
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timer.due()
    }

    /// True when the phrase list is empty
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_cancelled(&self) -> bool {
        self.lifecycle == Lifecycle::Cancelled
    }

    /// Time taken to type, hold and delete every phrase once, or `None` when
    /// that does not fit in a `Millis`
    pub fn cycle_length_ms(&self) -> Option<Millis> {
        (0..self.phrases.len()).try_fold(0 as Millis, |total, i| {
            let chars = Millis::try_from(self.phrases.char_len(i)).ok()?;
            let typing = chars.checked_mul(self.timings.typing)?;
            let deleting = chars.checked_mul(self.timings.deleting)?;
            total
                .checked_add(typing)?
                .checked_add(self.timings.pause)?
                .checked_add(deleting)
        })
    }

    /// State changes in one full cycle: every char typed and deleted, plus
    /// the end of each pause
    fn changes_per_cycle(&self) -> usize {
        (0..self.phrases.len()).fold(0usize, |total, i| {
            total
                .saturating_add(self.phrases.char_len(i).saturating_mul(2))
                .saturating_add(1)
        })
    }

    /// Move the pending deadline forward by every whole cycle that has
    /// elapsed by `now`. Returns the number of state changes skipped.
    fn skip_whole_cycles(&mut self, now: Millis) -> usize {
        let (Some(due), Some(cycle)) = (self.timer.due(), self.cycle_length_ms()) else {
            return 0;
        };
        if cycle == 0 || now < due {
            return 0;
        }

        let skipped = (now - due) / cycle;
        if skipped == 0 {
            return 0;
        }
        // skipped * cycle <= now - due, so neither step can overflow
        self.timer.schedule(due, skipped * cycle);
        trace!(skipped, cycle, "typewriter skipped whole cycles");

        usize::try_from(skipped)
            .unwrap_or(usize::MAX)
            .saturating_mul(self.changes_per_cycle())
    }

    fn current_len(&self) -> usize {
        self.phrases.char_len(self.active_index)
    }

    fn fire(&mut self, at: Millis) {
        match self.mode {
            Mode::Typing => {
                let next = self
                    .current_phrase()
                    .and_then(|phrase| phrase[self.text.len()..].chars().next());
                if let Some(c) = next {
                    self.text.push(c);
                    self.typed += 1;
                }
                trace!(text = %self.text, "typed");

                if self.typed >= self.current_len() {
                    self.enter_waiting(at);
                } else {
                    self.timer.schedule(at, self.timings.typing);
                }
            }
            Mode::Waiting => {
                self.mode = Mode::Deleting;
                if self.typed == 0 {
                    self.finish_phrase(at);
                } else {
                    self.timer.schedule(at, self.timings.deleting);
                }
            }
            Mode::Deleting => {
                if self.text.pop().is_some() {
                    self.typed -= 1;
                }
                trace!(text = %self.text, "deleted");

                if self.typed == 0 {
                    self.finish_phrase(at);
                } else {
                    self.timer.schedule(at, self.timings.deleting);
                }
            }
        }
    }

    fn enter_typing(&mut self, at: Millis) {
        self.mode = Mode::Typing;
        if self.current_len() == 0 {
            self.enter_waiting(at);
        } else {
            self.timer.schedule(at, self.timings.typing);
        }
    }

    fn enter_waiting(&mut self, at: Millis) {
        self.mode = Mode::Waiting;
        self.timer.schedule(at, self.timings.pause);
    }

    fn finish_phrase(&mut self, at: Millis) {
        let previous = self.active_index;
        self.active_index = (self.active_index + 1) % self.phrases.len();
        debug!(from = previous, to = self.active_index, "typewriter moved to next phrase");
        self.enter_typing(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(PhraseList::new(phrases.iter().copied()), TypewriterConfig::default())
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let tw = engine(&["Hi"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.active_index(), 0);
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.next_deadline(), None);
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = engine(&["abc"]);
        tw.start(0);

        assert_eq!(tw.advance_to(99), 0);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.advance_to(100), 1);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.advance_to(200), 1);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn test_waits_then_deletes() {
        let mut tw = engine(&["ab", "c"]);
        tw.start(0);

        tw.advance_to(200);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.mode(), Mode::Waiting);

        // Pause of 2000ms starting at 200
        tw.advance_to(2199);
        assert_eq!(tw.mode(), Mode::Waiting);
        tw.advance_to(2200);
        assert_eq!(tw.mode(), Mode::Deleting);
        assert_eq!(tw.text(), "ab");

        tw.advance_to(2250);
        assert_eq!(tw.text(), "a");
        tw.advance_to(2300);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn test_late_advance_catches_up_deterministically() {
        let mut stepped = engine(&["hello", "world"]);
        let mut jumped = stepped.clone();
        stepped.start(0);
        jumped.start(0);

        for t in (0..=7_000).step_by(10) {
            stepped.advance_to(t);
        }
        jumped.advance_to(7_000);

        assert_eq!(stepped.view(), jumped.view());
        assert_eq!(stepped.next_deadline(), jumped.next_deadline());
    }

    #[test]
    fn test_empty_list_is_idle() {
        let mut tw = engine(&[]);
        tw.start(0);
        assert!(tw.is_idle());
        assert_eq!(tw.next_deadline(), None);
        assert_eq!(tw.advance_to(1_000_000), 0);
        assert_eq!(tw.display_text(), DEFAULT_IDLE_TEXT);
        assert_eq!(tw.current_phrase(), None);
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut tw = engine(&["héé✨"]);
        tw.start(0);
        tw.advance_to(200);
        assert_eq!(tw.text(), "hé");
        tw.advance_to(400);
        assert_eq!(tw.text(), "héé✨");
        assert_eq!(tw.mode(), Mode::Waiting);
    }

    #[test]
    fn test_start_twice_is_ignored() {
        let mut tw = engine(&["ab"]);
        tw.start(0);
        tw.advance_to(100);
        tw.start(5_000);
        assert_eq!(tw.next_deadline(), Some(200));
    }

    #[test]
    fn test_cancel_before_start() {
        let mut tw = engine(&["ab"]);
        tw.cancel();
        tw.start(0);
        assert!(tw.is_cancelled());
        assert_eq!(tw.advance_to(10_000), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_cycle_length() {
        let tw = engine(&["Hi", ""]);
        // "Hi": 2*100 + 2000 + 2*50, "": 2000
        assert_eq!(tw.cycle_length_ms(), Some(2300 + 2000));
    }

    #[test]
    fn test_cycle_length_overflow_is_none() {
        let config = TypewriterConfig {
            pause_ms: i64::MAX,
            ..TypewriterConfig::default()
        };
        let mut tw = Typewriter::new(PhraseList::new(["a", "b"]), config).unwrap();
        assert_eq!(tw.cycle_length_ms(), None);

        // still ticks normally without a cycle length
        let pause = i64::MAX as Millis;
        tw.start(0);
        assert_eq!(tw.advance_to(pause), 1);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.mode(), Mode::Waiting);

        assert_eq!(tw.advance_to(pause + 150), 2);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn test_very_late_advance_skips_whole_cycles() {
        let mut near = engine(&["hello", "world"]);
        near.start(0);
        let mut far = near.clone();
        let cycle = near.cycle_length_ms().unwrap();
        let cycles = 1_000_000_000;

        let near_changes = near.advance_to(7_000);
        let far_changes = far.advance_to(cycles * cycle + 7_000);

        assert_eq!(near.view(), far.view());
        assert_eq!(
            far.next_deadline(),
            near.next_deadline().map(|due| due + cycles * cycle)
        );
        // 11 changes per phrase
        assert_eq!(far_changes, near_changes + 22 * cycles as usize);
    }

    #[test]
    fn test_rejects_non_positive_intervals() {
        let config = TypewriterConfig {
            deleting_interval_ms: 0,
            ..TypewriterConfig::default()
        };
        let err = Typewriter::new(PhraseList::new(["x"]), config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidConfiguration {
                field: "deleting_interval_ms",
                value: 0
            }
        );
    }
}
