//! # Introduction
//!
//! portty is a personal portfolio landing page for the terminal: a fixed
//! navigation header, a hero section whose title types itself out one
//! character at a time, a rotating description, and placeholder sections
//! below, all drawn with [ratatui](https://docs.rs/ratatui).
//!
//! ## Runtime pipeline
//!
//! ```text
//! config.toml → Config → Landing → (clock tick) → Typewriter / CaptionRotator → TUI
//! ```
//!
//! 1. [`config`] — loads phrases, captions, timings and page content.
//! 2. [`anim`] — the [`anim::Typewriter`] state machine, the
//!    [`anim::CaptionRotator`] and the millisecond [`anim::Timer`] they share.
//! 3. [`sections`] — works out the active section from scroll geometry.
//! 4. [`page`] — the [`page::Landing`] model: owns the animations, the scroll
//!    offset and the section tracker, and mounts/unmounts them together.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 6. [`logging`] — optional `tracing` output to a file.
//!
//! ## Timing
//!
//! Everything runs on one thread. The UI loop reads the clock and calls
//! [`page::Landing::advance_to`], which fires every animation deadline that
//! has passed. Nothing blocks; waiting is just a deadline in the future.

pub mod anim;
pub mod config;
pub mod logging;
pub mod page;
pub mod sections;
pub mod ui;
