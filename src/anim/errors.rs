//! Configuration error types for the animation components
//!
//! This module defines [`ConfigError`], which is returned synchronously from
//! the constructors of [`Typewriter`](super::Typewriter) and
//! [`CaptionRotator`](super::CaptionRotator). Once a component is built, its
//! timer loop has no failure modes.
//!
//! An empty phrase or caption list is deliberately not represented here: the
//! component idles with a fallback string instead.

use thiserror::Error;

/// Errors detected while building an animation component
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A timing interval was zero or negative
    #[error("invalid configuration: `{field}` must be a positive number of milliseconds (got {value})")]
    InvalidConfiguration { field: &'static str, value: i64 },
}

/// Validate a millisecond interval, converting it to an unsigned duration
pub(crate) fn positive_interval(field: &'static str, value: i64) -> Result<u64, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidConfiguration { field, value });
    }
    Ok(value as u64)
}
