//! Framework error type.
//!
//! The simulation core itself never fails: stale targets, double deliveries
//! and bad spawn-rate text are all handled as ordinary state.  `DhError`
//! covers the edges where something genuinely cannot proceed, which today
//! means configuration validation.

use thiserror::Error;

/// The top-level error type for `dh-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DhError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `dh-*` crates.
pub type DhResult<T> = Result<T, DhError>;
