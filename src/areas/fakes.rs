//! In-memory collaborators for unit tests

use crate::areas::git::VersionControl;
use crate::areas::provider::ContentProvider;
use crate::artifacts::content::fragment::Fragment;
use crate::errors::{HistoryError, VcsOperation};
use chrono::NaiveDateTime;
use std::cell::{Cell, RefCell};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Stage(PathBuf),
    Commit {
        message: String,
        path: Option<PathBuf>,
        date: NaiveDateTime,
    },
    Push {
        remote: String,
        branch: String,
    },
}

/// Records every call; optionally fails every n-th commit
#[derive(Debug, Default)]
pub struct RecordingVcs {
    calls: RefCell<Vec<VcsCall>>,
    commits: Cell<usize>,
    fail_every_nth_commit: Option<usize>,
    fail_push: bool,
}

impl RecordingVcs {
    pub fn failing_every_nth_commit(n: usize) -> Self {
        RecordingVcs {
            fail_every_nth_commit: Some(n),
            ..Default::default()
        }
    }

    pub fn failing_push() -> Self {
        RecordingVcs {
            fail_push: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.borrow().clone()
    }

    pub fn commits(&self) -> Vec<(Option<PathBuf>, NaiveDateTime)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                VcsCall::Commit { path, date, .. } => Some((path.clone(), *date)),
                _ => None,
            })
            .collect()
    }
}

impl VersionControl for RecordingVcs {
    async fn stage(&self, path: &Path) -> Result<(), HistoryError> {
        self.calls
            .borrow_mut()
            .push(VcsCall::Stage(path.to_path_buf()));
        Ok(())
    }

    async fn commit(
        &self,
        message: &str,
        path: Option<&Path>,
        date: NaiveDateTime,
    ) -> Result<(), HistoryError> {
        let count = self.commits.get() + 1;
        self.commits.set(count);

        if self.fail_every_nth_commit.is_some_and(|n| count % n == 0) {
            return Err(HistoryError::vcs(
                VcsOperation::Commit,
                path.map(Path::to_path_buf),
                "simulated failure",
            ));
        }

        self.calls.borrow_mut().push(VcsCall::Commit {
            message: message.to_string(),
            path: path.map(Path::to_path_buf),
            date,
        });
        Ok(())
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<(), HistoryError> {
        if self.fail_push {
            return Err(HistoryError::vcs(VcsOperation::Push, None, "remote hung up"));
        }

        self.calls.borrow_mut().push(VcsCall::Push {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        Ok(())
    }
}

/// Hands out the same fragment every time
#[derive(Debug, Clone, Default)]
pub struct StaticProvider(pub Fragment);

impl ContentProvider for StaticProvider {
    async fn fetch_fragment(&self) -> Fragment {
        self.0.clone()
    }
}

/// Writer whose output stays readable after being boxed into a repository
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
