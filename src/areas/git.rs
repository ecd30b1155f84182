//! Version-control collaborator
//!
//! The history generator only needs three operations from git: stage a path,
//! commit with a forced date, and push. [`GitCli`] runs the `git` binary for
//! each of them; tests substitute their own [`VersionControl`] implementations.

use crate::artifacts::schedule::TIMESTAMP_FORMAT;
use crate::errors::{HistoryError, VcsOperation};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tokio::process::Command;

#[allow(async_fn_in_trait)]
pub trait VersionControl {
    async fn stage(&self, path: &Path) -> Result<(), HistoryError>;

    /// Commit `path` (or everything staged when `None`) with both the author and
    /// committer dates set to `date`
    async fn commit(
        &self,
        message: &str,
        path: Option<&Path>,
        date: NaiveDateTime,
    ) -> Result<(), HistoryError>;

    async fn push(&self, remote: &str, branch: &str) -> Result<(), HistoryError>;
}

/// Drives the `git` executable inside a working tree
#[derive(Debug, Clone)]
pub struct GitCli {
    path: Box<Path>,
}

impl GitCli {
    pub fn new(path: Box<Path>) -> Self {
        GitCli { path }
    }

    async fn run(
        &self,
        operation: VcsOperation,
        target: Option<&Path>,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> Result<(), HistoryError> {
        tracing::debug!(?args, "running git");

        let output = Command::new("git")
            .args(args)
            .envs(envs.iter().copied())
            .current_dir(&self.path)
            .output()
            .await
            .map_err(|e| {
                HistoryError::vcs(operation, target.map(PathBuf::from), e.to_string())
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let reason = match stderr.trim() {
                "" => stdout.trim().to_string(),
                stderr => stderr.to_string(),
            };
            return Err(HistoryError::vcs(
                operation,
                target.map(PathBuf::from),
                format!("{} ({})", reason, output.status),
            ));
        }

        Ok(())
    }
}

impl VersionControl for GitCli {
    async fn stage(&self, path: &Path) -> Result<(), HistoryError> {
        let arg = path.to_string_lossy();
        self.run(VcsOperation::Stage, Some(path), &["add", "--", &*arg], &[])
            .await
    }

    async fn commit(
        &self,
        message: &str,
        path: Option<&Path>,
        date: NaiveDateTime,
    ) -> Result<(), HistoryError> {
        let date = date.format(TIMESTAMP_FORMAT).to_string();
        let path_arg = path.map(|path| path.to_string_lossy().into_owned());

        let mut args = vec!["commit", "--quiet", "-m", message, "--date", date.as_str()];
        if let Some(path_arg) = &path_arg {
            args.extend(["--", path_arg.as_str()]);
        }

        self.run(
            VcsOperation::Commit,
            path,
            &args,
            &[("GIT_COMMITTER_DATE", date.as_str())],
        )
        .await
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<(), HistoryError> {
        self.run(VcsOperation::Push, None, &["push", "--quiet", remote, branch], &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    #[tokio::test]
    async fn staging_outside_a_repository_fails_with_the_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.js"), "").unwrap();
        let git = GitCli::new(dir.path().into());

        let error = git.stage(Path::new("a.js")).await.unwrap_err();

        match error {
            HistoryError::Vcs {
                operation, path, ..
            } => {
                assert_eq!(operation, VcsOperation::Stage);
                assert_eq!(path.as_deref(), Some(Path::new("a.js")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
