//! Error types used by this crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Returned when the library file cannot be read, written or indexed.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Error originating from [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The library file exists but is not a JSON list of games
    #[error("{} is not a valid game library: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error originating from [`serde_json::Error`] while writing
    #[error("failed to serialize game library: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("no game at index {index} (library has {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Returned by the editor when a form cannot become a game.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditorError {
    #[error("an executable path is required")]
    MissingExecutable,
}

/// Returned when a game's executable could not be started.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("error launching {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
