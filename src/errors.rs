//! Error kinds raised while synthesizing history
//!
//! Only `InvalidRange`, `UnparsableDate` and `Config` are fatal. The others are
//! recorded per commit and the run moves on.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Version-control step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsOperation {
    Stage,
    Commit,
    Push,
}

impl fmt::Display for VcsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VcsOperation::Stage => "stage",
            VcsOperation::Commit => "commit",
            VcsOperation::Push => "push",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("invalid date: cannot parse {input:?} as YYYY-MM-DD")]
    UnparsableDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("content fetch failed: {0}")]
    ContentFetch(String),

    #[error("failed to write {path:?}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed for {path:?}: {reason}")]
    Vcs {
        operation: VcsOperation,
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("invalid configuration in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl HistoryError {
    pub fn vcs(operation: VcsOperation, path: Option<PathBuf>, reason: impl Into<String>) -> Self {
        HistoryError::Vcs {
            operation,
            path,
            reason: reason.into(),
        }
    }
}
