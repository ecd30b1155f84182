use crate::errors::HistoryError;
use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name of a generated placeholder: `<YYYY-MM-DD>_<NNN>.<ext>`
const GENERATED_FILE_REGEX: &str = r"^\d{4}-\d{2}-\d{2}_\d{3}\.(html|js|ts|vue|tsx)$";

/// Output tree of generated files, one directory per year
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn year_dir(&self, day: NaiveDate) -> PathBuf {
        self.path.join(format!("{:04}", day.year()))
    }

    /// Create the directory for `day`'s year; an existing one is fine
    pub fn ensure_year_dir(&self, day: NaiveDate) -> Result<PathBuf, HistoryError> {
        let dir = self.year_dir(day);

        std::fs::create_dir_all(&dir).map_err(|source| HistoryError::FileWrite {
            path: dir.clone(),
            source,
        })?;

        Ok(dir)
    }

    /// Every generated file below the workspace, sorted
    pub fn generated_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let re = regex::Regex::new(GENERATED_FILE_REGEX)
            .with_context(|| format!("invalid file name regex: {GENERATED_FILE_REGEX}"))?;

        let mut files = WalkDir::new(&self.path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| re.is_match(&entry.file_name().to_string_lossy()))
            .map(|entry| entry.into_path())
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }
}
