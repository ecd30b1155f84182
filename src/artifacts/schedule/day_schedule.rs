//! Per-day commit schedule
//!
//! A schedule is a short random walk through one calendar day. It starts at a
//! random time of day and steps forward by 30 to 90 minutes per commit. The walk
//! stops after the drawn number of commits or as soon as the current timestamp
//! is no longer on the scheduled day, whichever comes first. A walk that starts
//! late in the evening therefore often yields fewer commits than were drawn.

use crate::artifacts::schedule::time_of_day::TimeOfDay;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;
use std::ops::RangeInclusive;

/// Bounds of the number of commits drawn for a day
pub const COMMITS_PER_DAY: RangeInclusive<usize> = 1..=5;

/// Bounds, in minutes, of the gap between two consecutive commits
pub const GAP_MINUTES: RangeInclusive<i64> = 30..=90;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    day: NaiveDate,
    planned: usize,
    timestamps: Vec<NaiveDateTime>,
}

impl DaySchedule {
    pub fn build<R: Rng + ?Sized>(day: NaiveDate, rng: &mut R) -> Self {
        let planned = rng.random_range(COMMITS_PER_DAY);
        let mut current = Some(day.and_time(TimeOfDay::random(rng).into()));
        let mut timestamps = Vec::with_capacity(planned);

        while let Some(timestamp) = current {
            if timestamps.len() >= planned || timestamp.date() != day {
                break;
            }

            timestamps.push(timestamp);
            let gap = TimeDelta::minutes(rng.random_range(GAP_MINUTES));
            current = timestamp.checked_add_signed(gap);
        }

        DaySchedule {
            day,
            planned,
            timestamps,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Commit count drawn before the walk, at least `len()`
    pub fn planned(&self) -> usize {
        self.planned
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = &'a NaiveDateTime;
    type IntoIter = std::slice::Iter<'a, NaiveDateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.timestamps.iter()
    }
}
