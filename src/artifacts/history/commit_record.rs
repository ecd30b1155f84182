use crate::artifacts::schedule::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use derive_new::new;
use std::path::{Path, PathBuf};

/// A file handed to git together with its synthetic timestamp
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRecord {
    path: PathBuf,
    message: String,
    timestamp: NaiveDateTime,
}

impl CommitRecord {
    /// Record for a generated file, message derived from its extension
    pub fn for_file(path: PathBuf, timestamp: NaiveDateTime) -> Self {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        let message = format!("feat: add {extension} file");

        CommitRecord::new(path, message, timestamp)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Timestamp in the form passed to `git commit --date`
    pub fn git_date(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
