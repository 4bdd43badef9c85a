use dh_directory::DirectoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Bad faction list or configuration, rejected while building the
    /// directory.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
}

pub type SimResult<T> = Result<T, SimError>;
