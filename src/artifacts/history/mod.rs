//! Results of a generation run
//!
//! Every scheduled timestamp ends up as exactly one [`outcome::CommitOutcome`],
//! collected into a [`outcome::RunSummary`] so callers can inspect what
//! happened without scraping logs.

pub mod commit_record;
pub mod outcome;
