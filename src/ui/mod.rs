//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, animation clock
//! - **[`panes`]** — stateless render functions for the page body, the fixed
//!   header and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Landing`] and
//! a [`Clock`], then call [`App::run`] to mount the page and start the event loop.
//!
//! [`Landing`]: crate::page::Landing
//! [`Clock`]: crate::anim::Clock
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
