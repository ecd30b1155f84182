//! Data structures and algorithms behind the synthetic history
//!
//! - `schedule`: date ranges and the per-day timestamp walk
//! - `content`: fragments, file templates and rendered placeholder files
//! - `history`: commit records and the run summary

pub mod content;
pub mod history;
pub mod schedule;
