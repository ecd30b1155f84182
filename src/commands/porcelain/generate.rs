use crate::areas::git::VersionControl;
use crate::areas::provider::ContentProvider;
use crate::areas::repository::Repository;
use crate::artifacts::content;
use crate::artifacts::history::commit_record::CommitRecord;
use crate::artifacts::history::outcome::{CommitOutcome, RunSummary};
use crate::artifacts::schedule::DATE_FORMAT;
use crate::artifacts::schedule::date_range::DateRange;
use crate::artifacts::schedule::day_schedule::DaySchedule;
use crate::errors::HistoryError;
use chrono::NaiveDateTime;
use colored::Colorize;
use rand::Rng;
use std::io::Write;
use std::path::Path;

/// Exclusive upper bound of the numeric suffix in generated file names
const FILE_SUFFIX_BOUND: u32 = 1000;

/// Suffix draws attempted before settling on a name already on disk
const MAX_SUFFIX_DRAWS: usize = 32;

impl<V: VersionControl, P: ContentProvider> Repository<V, P> {
    /// Walk `range` day by day and commit a scheduled batch of placeholder files
    /// for each day
    ///
    /// A failing commit is logged and recorded in the summary; it never stops the
    /// rest of the run.
    pub async fn generate<R: Rng + ?Sized>(
        &self,
        range: &DateRange,
        rng: &mut R,
    ) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let total_days = range.num_days();

        for (index, day) in range.days().enumerate() {
            let year_dir = self.workspace().ensure_year_dir(day);
            let schedule = DaySchedule::build(day, rng);
            tracing::info!(
                day = %day,
                commits = schedule.len(),
                planned = schedule.planned(),
                "scheduled day"
            );

            let mut committed = 0;
            for timestamp in &schedule {
                let outcome = match &year_dir {
                    Ok(dir) => self.commit_scheduled(dir, *timestamp, rng).await,
                    Err(e) => CommitOutcome::failed(*timestamp, None, e),
                };

                match &outcome {
                    CommitOutcome::Committed(record) => {
                        committed += 1;
                        tracing::debug!(path = ?record.path(), at = %record.git_date(), "committed");
                    }
                    CommitOutcome::Unpushed { record, reason } => {
                        committed += 1;
                        tracing::warn!(path = ?record.path(), %reason, "committed but not pushed");
                    }
                    CommitOutcome::Failed {
                        path, step, reason, ..
                    } => {
                        tracing::warn!(?path, %step, %reason, "skipping scheduled commit");
                    }
                }
                summary.push(outcome);
            }
            summary.record_day();

            writeln!(
                self.writer(),
                "[{}/{}] {} {}/{} commits",
                index + 1,
                total_days,
                day.format(DATE_FORMAT),
                committed,
                schedule.len()
            )?;
        }

        Ok(summary)
    }

    /// Print the totals of a finished run
    pub fn report(&self, summary: &RunSummary) -> anyhow::Result<()> {
        let generated = self.workspace().generated_files()?.len();

        writeln!(
            self.writer(),
            "{} commits over {} days, {} not pushed, {} failed",
            summary.committed_count().to_string().green(),
            summary.days(),
            summary.unpushed_count().to_string().yellow(),
            summary.failed_count().to_string().red()
        )?;
        writeln!(
            self.writer(),
            "{} generated files in {}",
            generated,
            self.workspace().path().display()
        )?;

        Ok(())
    }

    async fn commit_scheduled<R: Rng + ?Sized>(
        &self,
        dir: &Path,
        timestamp: NaiveDateTime,
        rng: &mut R,
    ) -> CommitOutcome {
        let fragment = self.provider().fetch_fragment().await;
        let base_name = free_base_name(dir, timestamp, rng);

        let path = match content::render(dir, &base_name, &fragment, rng) {
            Ok(path) => path,
            Err(e) => return CommitOutcome::failed(timestamp, None, &e),
        };

        let record = CommitRecord::for_file(self.relative_path(&path), timestamp);
        if let Err(e) = self.commit_record(&record).await {
            return CommitOutcome::failed(timestamp, Some(record.path().to_path_buf()), &e);
        }

        if let Some(target) = self.push_target() {
            if let Err(e) = self.vcs().push(target.remote(), target.branch()).await {
                return CommitOutcome::Unpushed {
                    record,
                    reason: e.to_string(),
                };
            }
        }

        CommitOutcome::Committed(record)
    }

    async fn commit_record(&self, record: &CommitRecord) -> Result<(), HistoryError> {
        self.vcs().stage(record.path()).await?;
        self.vcs()
            .commit(record.message(), Some(record.path()), record.timestamp())
            .await
    }
}

/// `<YYYY-MM-DD>_<NNN>` not yet used by any generated file in `dir`
fn free_base_name<R: Rng + ?Sized>(dir: &Path, timestamp: NaiveDateTime, rng: &mut R) -> String {
    let date = timestamp.format(DATE_FORMAT).to_string();
    let mut base_name = String::new();

    for _ in 0..MAX_SUFFIX_DRAWS {
        base_name = format!("{date}_{:03}", rng.random_range(0..FILE_SUFFIX_BOUND));
        if !content::is_taken(dir, &base_name) {
            break;
        }
    }

    base_name
}
