//! Error types for the miti-calendar crate.

/// Error type for all fallible operations in the miti-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values, and weekday indices, plus the year-range failure reserved for
/// table-driven [`BsCalendar`](crate::BsCalendar) implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is zero or exceeds the number of days in
    /// the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month (1..=12) for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a weekday index is outside the valid range 0..=6.
    #[error("invalid weekday index: {index} (must be 0..=6, 0 = Sunday)")]
    InvalidWeekday {
        /// The invalid weekday index that was provided.
        index: u8,
    },

    /// Returned by [`BsCalendar`](crate::BsCalendar) implementations backed
    /// by per-year tables when asked about a year outside their range.
    ///
    /// The shipped [`ApproxBsCalendar`](crate::ApproxBsCalendar) is
    /// year-invariant and never produces this.
    #[error("year {year} is outside the calendar provider's supported range")]
    UnsupportedYear {
        /// The unsupported year that was requested.
        year: i32,
    },
}
