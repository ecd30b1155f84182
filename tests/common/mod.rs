#![allow(dead_code)]

pub mod command;

use std::path::Path;

/// One commit as printed by `git log --name-only`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedCommit {
    pub author_date: String,
    pub committer_date: String,
    pub subject: String,
    pub files: Vec<String>,
}

const COMMIT_MARKER: &str = "@@commit";

/// Parse `git log --name-only` output produced with [`command::git_log_format`]
pub fn parse_git_log(raw: &str) -> Vec<LoggedCommit> {
    raw.split(COMMIT_MARKER)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| {
            let mut lines = chunk.lines().filter(|line| !line.trim().is_empty());
            let header = lines.next().unwrap_or_default();
            let fields = header.split('|').collect::<Vec<_>>();

            LoggedCommit {
                author_date: fields.first().unwrap_or(&"").to_string(),
                committer_date: fields.get(1).unwrap_or(&"").to_string(),
                subject: fields.get(2).unwrap_or(&"").to_string(),
                files: lines.map(|line| line.trim().to_string()).collect(),
            }
        })
        .collect()
}

pub fn count_files(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
