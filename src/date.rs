//! Calendar date handling for birthday lookups
//!
//! A birthday lookup is addressed by a day-of-month and a month. This module
//! validates those two integers, fills missing values from the local calendar
//! date, and derives the identifiers used for both the remote request and the
//! cache entry.

use std::fmt;

use chrono::{Datelike, Local};
use thiserror::Error;

/// Full month names, indexed by month number minus one
///
/// These exact labels are what the birthday endpoint expects in its
/// `themonth` query parameter, and they also appear in cache file names.
pub static MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Error types for day/month validation
#[derive(Debug, Error)]
pub enum DateError {
    /// The day is outside [1, 31]
    #[error("day must be within 1-31, got {0}")]
    DayOutOfRange(i32),

    /// The month is outside [1, 12]
    #[error("month must be within 1-12, got {0}")]
    MonthOutOfRange(i32),
}

/// A validated (day, month) pair identifying one birthday page
///
/// Construction is the only place range checks happen; once a value exists,
/// every derived identifier (display label, cache key, month name) is safe to
/// compute. Identical (day, month) pairs always derive the identical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayDate {
    day: u8,
    month: u8,
}

impl BirthdayDate {
    /// Creates a BirthdayDate after range-checking both components
    ///
    /// # Returns
    /// * `Ok(BirthdayDate)` if day is in [1, 31] and month is in [1, 12]
    /// * `Err(DateError)` naming the offending component otherwise
    pub fn new(day: i32, month: i32) -> Result<Self, DateError> {
        if !(1..=31).contains(&day) {
            return Err(DateError::DayOutOfRange(day));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        Ok(Self {
            day: day as u8,
            month: month as u8,
        })
    }

    /// Creates a BirthdayDate from optional components, defaulting each
    /// missing one from the current local calendar date
    pub fn from_parts(day: Option<i32>, month: Option<i32>) -> Result<Self, DateError> {
        let today = Local::now();
        Self::new(
            day.unwrap_or(today.day() as i32),
            month.unwrap_or(today.month() as i32),
        )
    }

    /// Day of month in [1, 31]
    pub fn day(&self) -> u32 {
        u32::from(self.day)
    }

    /// Full month name, e.g. "February"
    pub fn month_name(&self) -> &'static str {
        MONTHS[usize::from(self.month) - 1]
    }

    /// Cache key addressing this date's stored page, e.g. "14-February"
    pub fn cache_key(&self) -> String {
        format!("{}-{}", self.day, self.month_name())
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.month_name())
    }
}
