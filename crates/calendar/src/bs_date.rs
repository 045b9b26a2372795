//! Validated Bikram Sambat calendar date.

use crate::approx::approx_days_in_month;
use crate::error::CalendarError;
use crate::month::BsMonth;
use crate::year_month::BsYearMonth;

/// A Bikram Sambat calendar date.
///
/// Construction validates the day against the fixed month-length
/// approximation, so a held `BsDate` always satisfies
/// `1 <= day <= approx_days_in_month(month)`. Ordering is chronological:
/// year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BsDate {
    year: i32,
    month: BsMonth,
    day: u8,
}

impl BsDate {
    /// Creates a new `BsDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is zero or exceeds the
    /// approximate length of `month`.
    pub fn new(year: i32, month: BsMonth, day: u8) -> Result<Self, CalendarError> {
        let max_day = approx_days_in_month(month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.number(),
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a new `BsDate` from plain numbers, validating the month too.
    ///
    /// Convenience for callers holding untyped input (CLI arguments,
    /// deserialized values).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is invalid for that month.
    pub fn from_numbers(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, BsMonth::from_number(month)?, day)
    }

    /// Returns the BS year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> BsMonth {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the year-month pair this date falls in.
    pub fn year_month(self) -> BsYearMonth {
        BsYearMonth::new(self.year, self.month)
    }
}
