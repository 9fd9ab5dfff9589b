//! Timer-driven text animation
//!
//! This module provides the animated pieces of the hero section:
//! - [`clock`]: Millisecond clocks and the one-shot [`clock::Timer`] slot
//! - [`typewriter`]: Types, pauses on and deletes a list of phrases, forever
//! - [`caption`]: Rotates a list of captions on a fixed interval
//! - [`errors`]: Construction-time configuration errors
//!
//! # Scheduling Model
//!
//! Nothing here owns a thread. Each component keeps at most one pending
//! deadline, and the host loop calls `advance_to(now)` whenever it wakes up.
//! Every deadline that has passed fires in order, and each firing schedules
//! the next deadline relative to the one that fired:
//!
//! ```text
//! host loop → clock.now_ms() → advance_to(now) → fire(due) → schedule(due + delay)
//! ```
//!
//! The typewriter and the rotator run on independent timers. Their firings
//! may interleave in any order.

pub mod caption;
pub mod clock;
pub mod errors;
pub mod typewriter;

pub use caption::CaptionRotator;
pub use clock::{Clock, ManualClock, Millis, SystemClock, Timer};
pub use errors::ConfigError;
pub use typewriter::{Mode, PhraseList, Typewriter, TypewriterConfig, TypewriterView};
