//! Directory error type.

use thiserror::Error;

use dh_core::{DhError, FactionId};

/// Errors produced by `dh-directory`.
///
/// Only construction can fail.  Queries and notifications treat stale ids
/// as ordinary "nothing there" outcomes.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("a simulation needs at least one faction")]
    NoFactions,

    #[error("too many factions: {0} (limit {max})", max = FactionId::INVALID.0)]
    TooManyFactions(usize),

    #[error(transparent)]
    Core(#[from] DhError),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
