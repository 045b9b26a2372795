//! Year-month pair with wrap-around navigation.

use std::fmt;

use crate::bs_date::BsDate;
use crate::error::CalendarError;
use crate::month::BsMonth;

/// A specific month of a specific Bikram Sambat year.
///
/// This is the unit of navigation for the month view: [`next`](Self::next)
/// and [`prev`](Self::prev) step through months and carry across year
/// boundaries, so Chait 2080 is followed by Baisakh 2081. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BsYearMonth {
    year: i32,
    month: BsMonth,
}

impl BsYearMonth {
    /// Creates a year-month pair.
    pub fn new(year: i32, month: BsMonth) -> Self {
        Self { year, month }
    }

    /// Creates a year-month pair from plain numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn from_numbers(year: i32, month: u8) -> Result<Self, CalendarError> {
        Ok(Self::new(year, BsMonth::from_number(month)?))
    }

    /// Returns the BS year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> BsMonth {
        self.month
    }

    /// Returns the month after this one, wrapping Chait into the next year.
    pub fn next(self) -> Self {
        match self.month {
            BsMonth::Chait => Self::new(self.year + 1, BsMonth::Baisakh),
            other => Self::new(
                self.year,
                BsMonth::from_number(other.number() + 1).expect("number + 1 is at most 12"),
            ),
        }
    }

    /// Returns the month before this one, wrapping Baisakh into the
    /// previous year.
    pub fn prev(self) -> Self {
        match self.month {
            BsMonth::Baisakh => Self::new(self.year - 1, BsMonth::Chait),
            other => Self::new(
                self.year,
                BsMonth::from_number(other.number() - 1).expect("number - 1 is at least 1"),
            ),
        }
    }

    /// Returns true when `date` falls inside this month.
    pub fn contains(self, date: BsDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for BsYearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
