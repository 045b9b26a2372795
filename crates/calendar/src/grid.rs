//! Month grid assembly for calendar views.

use crate::approx::BsCalendar;
use crate::bs_date::BsDate;
use crate::error::CalendarError;
use crate::weekday::Weekday;
use crate::year_month::BsYearMonth;

/// One slot in a month grid.
///
/// Cells before the first of the month carry no day number and exist only
/// to align day 1 with its weekday column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    day: Option<u8>,
    is_today: bool,
    weekday: Weekday,
}

impl CalendarCell {
    /// Returns the day of the month, or `None` for a leading blank.
    pub fn day(self) -> Option<u8> {
        self.day
    }

    /// Returns true when this cell holds the reference date.
    pub fn is_today(self) -> bool {
        self.is_today
    }

    /// Returns the weekday column this cell sits in.
    pub fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns true for a leading blank cell.
    pub fn is_empty(self) -> bool {
        self.day.is_none()
    }
}

/// A fully laid-out month: leading blanks followed by one cell per day.
///
/// Cells run Sunday-first in row-major order. The final week may hold fewer
/// than seven cells; [`weeks`](Self::weeks) yields it short rather than
/// padding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    view: BsYearMonth,
    start_weekday: Weekday,
    days_in_month: u8,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Returns the year-month this grid lays out.
    pub fn view(&self) -> BsYearMonth {
        self.view
    }

    /// Returns the weekday of day 1.
    pub fn start_weekday(&self) -> Weekday {
        self.start_weekday
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// Returns all cells, leading blanks first.
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Returns the cells grouped into weeks of at most seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    /// Returns the position of the cell marked as today, if any.
    pub fn today_index(&self) -> Option<usize> {
        self.cells.iter().position(|cell| cell.is_today)
    }
}

/// Lays out one month as a weekday-aligned grid.
///
/// The grid opens with one blank cell per weekday preceding day 1, then one
/// cell per day of the month. When `today` falls inside `view`, exactly one
/// cell is marked; a `today` from any other month marks nothing.
///
/// # Errors
///
/// Propagates any error from the [`BsCalendar`] implementation; the
/// built-in approximation never fails.
pub fn month_grid<C: BsCalendar>(
    calendar: &C,
    view: BsYearMonth,
    today: Option<BsDate>,
) -> Result<MonthGrid, CalendarError> {
    let days_in_month = calendar.days_in_month(view.year(), view.month())?;
    let start_weekday = calendar.start_weekday(view.year(), view.month())?;

    let leading = usize::from(start_weekday.index());
    let total = leading + usize::from(days_in_month);
    let mut cells = Vec::with_capacity(total);
    for position in 0..total {
        let weekday = Weekday::from_index((position % 7) as u8).expect("position is reduced mod 7");
        if position < leading {
            cells.push(CalendarCell {
                day: None,
                is_today: false,
                weekday,
            });
        } else {
            let day = (position - leading + 1) as u8;
            let is_today = today.is_some_and(|t| view.contains(t) && t.day() == day);
            cells.push(CalendarCell {
                day: Some(day),
                is_today,
                weekday,
            });
        }
    }

    Ok(MonthGrid {
        view,
        start_weekday,
        days_in_month,
        cells,
    })
}
