//! Error types for the kanban board.

use std::path::PathBuf;

use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal or file IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file could not be read
    #[error("cannot read seed file {}: {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not a valid task list
    #[error("invalid seed file {}: {source}", .path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Logger could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
