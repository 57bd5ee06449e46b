//! Export window computation.
//!
//! The exporter runs shortly after midnight and collects the previous day. The
//! window is the half-open range `[end - 24h, end)` where `end` is either the
//! `--latestdate` value (at midnight) or the current local time.
//!
//! Example: `--latestdate 2020-08-21` gives `start = 2020-08-20`,
//! `end = 2020-08-21` and the file `results-2020-08-20.tsv`.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Regex;

use crate::config::{DATE_FORMAT, OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX};
use crate::error_handling::ExportError;

// chrono accepts unpadded fields, the flag format does not
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape regex is valid"));

/// A 24-hour half-open range of issuance timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ExportWindow {
    /// Builds the window that ends at `end`.
    pub fn ending_at(end: NaiveDateTime) -> Self {
        Self {
            start: end - TimeDelta::hours(24),
            end,
        }
    }

    /// Resolves the window from an optional `YYYY-MM-DD` reference date.
    ///
    /// When `latest_date` is `None` the window ends at `now`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidDate` if `latest_date` is not a strict
    /// calendar date.
    pub fn resolve(latest_date: Option<&str>, now: NaiveDateTime) -> Result<Self, ExportError> {
        match latest_date {
            Some(value) => {
                let date = parse_reference_date(value)?;
                Ok(Self::ending_at(date.and_time(NaiveTime::MIN)))
            }
            None => Ok(Self::ending_at(now)),
        }
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// `start` formatted as `YYYY-MM-DD`, the file's date tag.
    pub fn start_stamp(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `end` formatted as `YYYY-MM-DD`, the query's exclusive bound.
    pub fn end_stamp(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// Name of the uncompressed results file, `results-<start>.tsv`.
    pub fn output_file_name(&self) -> String {
        format!(
            "{}{}.{}",
            OUTPUT_FILE_PREFIX,
            self.start_stamp(),
            OUTPUT_FILE_EXTENSION
        )
    }
}

impl fmt::Display for ExportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_stamp(), self.end_stamp())
    }
}

/// Parses a `--latestdate` value.
///
/// Only zero-padded `YYYY-MM-DD` is accepted; a time-of-day component or
/// surrounding whitespace is rejected.
pub fn parse_reference_date(value: &str) -> Result<NaiveDate, ExportError> {
    if !DATE_SHAPE.is_match(value) {
        return Err(ExportError::InvalidDate {
            value: value.to_string(),
            reason: "not in YYYY-MM-DD form".to_string(),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| ExportError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
