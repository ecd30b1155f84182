use crate::artifacts::schedule::DATE_FORMAT;
use crate::errors::HistoryError;
use chrono::NaiveDate;

/// Inclusive range of calendar days, `start <= end`
///
/// Only constructible through validation, so holding one means the range is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, HistoryError> {
        if start > end {
            return Err(HistoryError::InvalidRange {
                start: start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
            });
        }

        Ok(DateRange { start, end })
    }

    /// Parse both bounds as `YYYY-MM-DD` and validate their order
    pub fn parse(start: &str, end: &str) -> Result<Self, HistoryError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Number of calendar days covered, both ends included
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, HistoryError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        HistoryError::UnparsableDate {
            input: input.to_string(),
            source,
        }
    })
}
