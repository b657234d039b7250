// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DirListError {
    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl DirListError {
    /// Whether this error aborts the whole listing.
    ///
    /// Only unreadable directories and broken output streams are fatal; every
    /// other failure is local to a single entry.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Listing(err) => err.is_fatal(),
            Self::Output(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirListError>;

/// Failures raised while walking and inspecting a directory tree.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("cannot open directory '{path}': {source}")]
    PathUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stat {path}: {source}")]
    StatFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stat {path}: {field} is not available on this platform")]
    StatUnavailable { path: PathBuf, field: &'static str },

    #[error("not descending into '{path}': directory cycle detected")]
    CycleDetected { path: PathBuf },
}

impl ListingError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::PathUnreadable { .. })
    }
}

pub type ListingResult<T> = std::result::Result<T, ListingError>;
