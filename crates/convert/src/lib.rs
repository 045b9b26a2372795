//! Approximate Gregorian (AD) to Bikram Sambat (BS) date conversion.
//!
//! The conversion applies fixed offsets to the Gregorian year, month, and
//! day, then folds overflow back into range. It stays within one day of the
//! true almanac date for contemporary years and needs no lookup tables. The
//! weekday, by contrast, comes straight from the Gregorian date and is exact.

use chrono::{Datelike, NaiveDate};
use miti_calendar::{approx_days_in_month, BsDate, BsMonth, Weekday};

const YEAR_OFFSET: i32 = 56;
const MONTH_OFFSET: u32 = 8;
const DAY_OFFSET: u32 = 15;
const CARRY_DAY_THRESHOLD: u32 = 30;

/// Converts a Gregorian date to its approximate BS equivalent.
///
/// Offsets of 56 years, 8 months, and 15 days are added, a day past 30
/// rolls into the next month, and a month past 12 rolls into the next year.
/// When the rolled day lands past the end of a 29-day month it is clamped
/// to the month's last day, so the result is always a valid date.
pub fn to_bs(ad: NaiveDate) -> BsDate {
    let mut year = ad.year() + YEAR_OFFSET;
    let mut month = ad.month() + MONTH_OFFSET;
    let mut day = ad.day() + DAY_OFFSET;

    if day > CARRY_DAY_THRESHOLD {
        day -= CARRY_DAY_THRESHOLD;
        month += 1;
    }
    if month > 12 {
        month -= 12;
        year += 1;
    }

    let month = BsMonth::from_number(month as u8).expect("carry keeps month in 1..=12");
    let day = (day as u8).min(approx_days_in_month(month));
    BsDate::new(year, month, day).expect("day is clamped to the month length")
}

/// Returns the weekday of a Gregorian date, Sunday-first.
pub fn weekday_of(ad: NaiveDate) -> Weekday {
    let index = ad.weekday().num_days_from_sunday() as u8;
    Weekday::from_index(index).expect("chrono weekday index is 0..=6")
}

/// Converts a Gregorian date and pairs it with its exact weekday.
///
/// The weekday belongs to the input date, not to the approximate BS date,
/// which keeps displayed weekdays correct even when the converted day is
/// off by one.
pub fn to_bs_with_weekday(ad: NaiveDate) -> (BsDate, Weekday) {
    (to_bs(ad), weekday_of(ad))
}
