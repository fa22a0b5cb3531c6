use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a comparison run.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A matched file could not be opened or read (including invalid UTF-8).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, CompareError>;
