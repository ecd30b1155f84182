//! Temporal scheduling
//!
//! Decides, for each calendar day of a [`DateRange`], how many commits happen
//! and at which synthetic timestamps.
//!
//! - `date_range`: validated inclusive range of calendar days
//! - `time_of_day`: uniformly random hour/minute/second
//! - `day_schedule`: the per-day random walk of commit timestamps

pub mod date_range;
pub mod day_schedule;
pub mod time_of_day;

/// Format used for calendar dates on the command line, in config files and in file names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format handed to git as the commit date
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
