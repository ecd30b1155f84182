use crate::artifacts::history::commit_record::CommitRecord;
use crate::errors::{HistoryError, VcsOperation};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Step of the per-commit pipeline that gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStep {
    Write,
    Stage,
    Commit,
    Push,
}

impl From<VcsOperation> for FailedStep {
    fn from(operation: VcsOperation) -> Self {
        match operation {
            VcsOperation::Stage => FailedStep::Stage,
            VcsOperation::Commit => FailedStep::Commit,
            VcsOperation::Push => FailedStep::Push,
        }
    }
}

impl std::fmt::Display for FailedStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FailedStep::Write => "write",
            FailedStep::Stage => "stage",
            FailedStep::Commit => "commit",
            FailedStep::Push => "push",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(CommitRecord),
    /// Committed locally, but the push afterwards was rejected
    Unpushed {
        record: CommitRecord,
        reason: String,
    },
    Failed {
        timestamp: NaiveDateTime,
        path: Option<PathBuf>,
        step: FailedStep,
        reason: String,
    },
}

impl CommitOutcome {
    /// Classify an error raised while handling the commit scheduled at `timestamp`
    pub fn failed(timestamp: NaiveDateTime, path: Option<PathBuf>, error: &HistoryError) -> Self {
        let step = match error {
            HistoryError::Vcs { operation, .. } => (*operation).into(),
            _ => FailedStep::Write,
        };

        CommitOutcome::Failed {
            timestamp,
            path,
            step,
            reason: error.to_string(),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            CommitOutcome::Committed(record) | CommitOutcome::Unpushed { record, .. } => {
                record.timestamp()
            }
            CommitOutcome::Failed { timestamp, .. } => *timestamp,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            CommitOutcome::Committed(record) | CommitOutcome::Unpushed { record, .. } => {
                Some(record.path())
            }
            CommitOutcome::Failed { path, .. } => path.as_deref(),
        }
    }

    /// True when the commit exists locally, pushed or not
    pub fn is_committed(&self) -> bool {
        !matches!(self, CommitOutcome::Failed { .. })
    }
}

/// Everything a generation run did, in schedule order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    days: usize,
    outcomes: Vec<CommitOutcome>,
}

impl RunSummary {
    pub fn record_day(&mut self) {
        self.days += 1;
    }

    pub fn push(&mut self, outcome: CommitOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn outcomes(&self) -> &[CommitOutcome] {
        &self.outcomes
    }

    /// Records of every commit created locally, including unpushed ones
    pub fn committed(&self) -> impl Iterator<Item = &CommitRecord> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CommitOutcome::Committed(record) | CommitOutcome::Unpushed { record, .. } => {
                Some(record)
            }
            CommitOutcome::Failed { .. } => None,
        })
    }

    pub fn committed_count(&self) -> usize {
        self.committed().count()
    }

    pub fn unpushed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, CommitOutcome::Unpushed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.committed_count()
    }
}
