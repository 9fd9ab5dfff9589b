//! Tracing setup for the portty binary.
//!
//! The TUI owns stdout and stderr while it runs, so logs only go somewhere
//! when `--log-file` is given. Filter directives come from `PORTTY_LOG`,
//! then `RUST_LOG`, then the `--verbose` flag.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives (e.g. `portty=trace`)
pub const LOG_ENV_VAR: &str = "PORTTY_LOG";

/// Build the filter from the environment, falling back to the verbosity flag.
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "portty=debug" } else { "portty=info" };
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a subscriber that appends to `log_file`. Does nothing without one.
pub fn init_tracing(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

/// Log panics through tracing, after `restore` has put the terminal back.
pub fn install_panic_hook(restore: fn()) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();

        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("<non-string panic payload>");

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "<unknown>".to_string());

        tracing::error!(%location, %payload, "panic");
        default_hook(info);
    }));
}
