//! Fixed month-length and start-weekday approximations.
//!
//! The true Bikram Sambat calendar assigns each month 29 to 32 days based on
//! astronomical calculation, varying per year. This module carries the fixed
//! approximation used for decorative display: month lengths that never vary
//! by year, and a start-weekday heuristic with no astronomical basis at all.
//! Neither function is suitable for authoritative date lookups.

use crate::error::CalendarError;
use crate::month::BsMonth;
use crate::weekday::Weekday;

/// Approximate days per BS month, indexed by `month.number() - 1`.
///
/// Months 1..=8 get 31 days, months 9..=10 get 30, months 11..=12 get 29.
/// True BS month lengths vary per year between 29 and 32 days; this table
/// does not vary at all.
pub(crate) const DAYS_PER_MONTH: [u8; 12] = [31, 31, 31, 31, 31, 31, 31, 31, 30, 30, 29, 29];

/// Returns the approximate number of days in a BS month.
///
/// Year-invariant: the same month always reports the same length.
///
/// # Examples
///
/// ```
/// use miti_calendar::{BsMonth, approx_days_in_month};
///
/// assert_eq!(approx_days_in_month(BsMonth::Baisakh), 31);
/// assert_eq!(approx_days_in_month(BsMonth::Poush), 30);
/// assert_eq!(approx_days_in_month(BsMonth::Falgun), 29);
/// ```
pub fn approx_days_in_month(month: BsMonth) -> u8 {
    DAYS_PER_MONTH[(month.number() - 1) as usize]
}

/// Returns the approximate weekday of day 1 of a BS month.
///
/// Computed as `(year % 7 + month % 7 + 2) % 7`, a placeholder heuristic
/// with no calendrical meaning beyond giving each month a stable, plausible
/// offset in the rendered grid. Negative years use the Euclidean remainder
/// so the result is always a valid weekday.
pub fn approx_start_weekday(year: i32, month: BsMonth) -> Weekday {
    let index = (year.rem_euclid(7) + i32::from(month.number() % 7) + 2).rem_euclid(7) as u8;
    Weekday::from_index(index).expect("index is reduced mod 7")
}

/// Calendar provider seam: month lengths and month start weekdays.
///
/// The grid builder and every display call site go through this trait, so an
/// exact table-driven provider (per-year month lengths sourced from official
/// BS tables) can replace the approximation without touching callers. The
/// `Result` return exists for such providers, which cover a bounded year
/// range and report [`CalendarError::UnsupportedYear`] outside it.
pub trait BsCalendar {
    /// Returns the number of days in the given BS month.
    ///
    /// # Errors
    ///
    /// Implementations backed by per-year tables return
    /// [`CalendarError::UnsupportedYear`] for years outside their range.
    fn days_in_month(&self, year: i32, month: BsMonth) -> Result<u8, CalendarError>;

    /// Returns the weekday of day 1 of the given BS month.
    ///
    /// # Errors
    ///
    /// Implementations backed by per-year tables return
    /// [`CalendarError::UnsupportedYear`] for years outside their range.
    fn start_weekday(&self, year: i32, month: BsMonth) -> Result<Weekday, CalendarError>;
}

/// The shipped [`BsCalendar`]: the fixed approximation, valid for any year.
///
/// Accurate to roughly a day near month boundaries and not at all for
/// weekday alignment; callers needing calendrical exactness must swap in a
/// table-driven provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxBsCalendar;

impl BsCalendar for ApproxBsCalendar {
    fn days_in_month(&self, _year: i32, month: BsMonth) -> Result<u8, CalendarError> {
        Ok(approx_days_in_month(month))
    }

    fn start_weekday(&self, year: i32, month: BsMonth) -> Result<Weekday, CalendarError> {
        Ok(approx_start_weekday(year, month))
    }
}
