use crate::areas::git::VersionControl;
use crate::areas::provider::ContentProvider;
use crate::areas::repository::Repository;
use crate::artifacts::history::commit_record::CommitRecord;
use crate::artifacts::schedule::time_of_day::TimeOfDay;
use anyhow::Context;
use chrono::NaiveDate;
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};

impl<V: VersionControl, P: ContentProvider> Repository<V, P> {
    /// Stage the whole working tree and commit it on `date` at a random time of day
    pub async fn initialize<R: Rng + ?Sized>(
        &self,
        message: &str,
        date: NaiveDate,
        rng: &mut R,
    ) -> anyhow::Result<CommitRecord> {
        let timestamp = date.and_time(TimeOfDay::random(rng).into());
        let message = message.trim();
        let record = CommitRecord::new(PathBuf::from("."), message.to_string(), timestamp);

        self.vcs()
            .stage(Path::new("."))
            .await
            .context("failed to stage the working tree")?;
        self.vcs()
            .commit(record.message(), None, record.timestamp())
            .await
            .context("failed to create the initial commit")?;

        writeln!(
            self.writer(),
            "Committed all files with date {}",
            record.git_date()
        )?;

        Ok(record)
    }
}
