//! TUI pane rendering modules
//!
//! This module provides the rendering logic for everything on screen,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`page`]: The scrolling page body (hero plus placeholder sections)
//! - [`header`]: Fixed header with logo and section navigation, drawn over the page
//! - [`status`]: Status bar with keybindings and animation state
//! - `utils`: Shared text helpers (word wrapping, vertical centering)
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*()` function that takes the
//! [`Landing`](crate::page::Landing) model by reference. Panes hold no state
//! of their own.

mod utils;

pub mod header;
pub mod page;
pub mod status;

// Re-export render functions for convenience
pub use header::render_header;
pub use page::{hero_lines, render_page, section_lines};
pub use status::render_status_bar;
