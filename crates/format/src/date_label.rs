//! Long-form date and month-heading labels.

use miti_calendar::{BsDate, BsYearMonth, Weekday};

use crate::options::{digit_label, FormatOptions, WeekdayStyle};

/// Returns the weekday name in the configured length.
pub fn weekday_label(weekday: Weekday, options: &FormatOptions) -> &'static str {
    match options.weekday() {
        WeekdayStyle::Short => weekday.name(),
        WeekdayStyle::Full => weekday.full_name(),
    }
}

/// Renders a date in the long Nepali form, e.g. `१६ पौष २०८०, सोम`.
///
/// The weekday is passed in rather than derived, so callers can pair the
/// exact Gregorian weekday with an approximate date.
pub fn long_date(date: BsDate, weekday: Weekday, options: &FormatOptions) -> String {
    format!(
        "{} {} {}, {}",
        digit_label(i64::from(date.day()), options),
        date.month().name(),
        digit_label(i64::from(date.year()), options),
        weekday_label(weekday, options)
    )
}

/// Renders a month heading, e.g. `पौष २०८०`.
pub fn month_title(view: BsYearMonth, options: &FormatOptions) -> String {
    format!(
        "{} {}",
        view.month().name(),
        digit_label(i64::from(view.year()), options)
    )
}
