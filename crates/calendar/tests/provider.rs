//! A table-backed calendar provider, as an almanac-driven
//! implementation would supply, layered over the same trait the
//! built-in approximation implements.

use miti_calendar::{
    approx_days_in_month, month_grid, BsCalendar, BsMonth, BsYearMonth, CalendarError, Weekday,
};

/// Month lengths read from a fixed per-year table, with weekdays chained
/// from an anchor date instead of the heuristic formula.
struct TableCalendar {
    first_year: i32,
    lengths: Vec<[u8; 12]>,
    anchor: Weekday,
}

impl TableCalendar {
    fn fixture() -> Self {
        Self {
            first_year: 2080,
            lengths: vec![
                [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
                [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
            ],
            anchor: Weekday::Wednesday,
        }
    }

    fn row(&self, year: i32) -> Result<&[u8; 12], CalendarError> {
        let index = year - self.first_year;
        if index < 0 || index as usize >= self.lengths.len() {
            return Err(CalendarError::UnsupportedYear { year });
        }
        Ok(&self.lengths[index as usize])
    }
}

impl BsCalendar for TableCalendar {
    fn days_in_month(&self, year: i32, month: BsMonth) -> Result<u8, CalendarError> {
        let row = self.row(year)?;
        Ok(row[usize::from(month.number() - 1)])
    }

    fn start_weekday(&self, year: i32, month: BsMonth) -> Result<Weekday, CalendarError> {
        self.row(year)?;
        let mut offset = u32::from(self.anchor.index());
        for walked in self.first_year..=year {
            let row = self.row(walked)?;
            let upto = if walked == year {
                usize::from(month.number() - 1)
            } else {
                12
            };
            for length in &row[..upto] {
                offset += u32::from(*length);
            }
        }
        Weekday::from_index((offset % 7) as u8)
    }
}

#[test]
fn table_lengths_override_the_approximation() {
    let calendar = TableCalendar::fixture();
    assert_eq!(calendar.days_in_month(2080, BsMonth::Jeth).unwrap(), 32);
    assert_eq!(approx_days_in_month(BsMonth::Jeth), 31);
}

#[test]
fn years_outside_the_table_are_rejected() {
    let calendar = TableCalendar::fixture();
    for year in [2078, 2079, 2082, 2100] {
        let err = calendar.days_in_month(year, BsMonth::Baisakh).unwrap_err();
        assert_eq!(
            err,
            CalendarError::UnsupportedYear { year },
            "wrong error for year {year}"
        );
    }
}

#[test]
fn start_weekday_chains_from_the_anchor() {
    let calendar = TableCalendar::fixture();
    // Anchor: 1 Baisakh 2080 is a Wednesday (index 3).
    assert_eq!(
        calendar.start_weekday(2080, BsMonth::Baisakh).unwrap(),
        Weekday::Wednesday
    );
    // Baisakh 2080 has 31 days, so Jeth opens (3 + 31) % 7 = 6 days in.
    assert_eq!(
        calendar.start_weekday(2080, BsMonth::Jeth).unwrap(),
        Weekday::Saturday
    );
    // Year 2080 totals 366 days, so 1 Baisakh 2081 lands (3 + 366) % 7 = 5.
    assert_eq!(
        calendar.start_weekday(2081, BsMonth::Baisakh).unwrap(),
        Weekday::Friday
    );
}

#[test]
fn month_grid_uses_the_table() {
    let calendar = TableCalendar::fixture();
    let view = BsYearMonth::new(2080, BsMonth::Jeth);
    let grid = month_grid(&calendar, view, None).unwrap();
    assert_eq!(grid.days_in_month(), 32);
    assert_eq!(grid.start_weekday(), Weekday::Saturday);
    let last = grid.cells().last().unwrap();
    assert_eq!(last.day(), Some(32));
}

#[test]
fn month_grid_propagates_unsupported_year() {
    let calendar = TableCalendar::fixture();
    let view = BsYearMonth::new(2085, BsMonth::Baisakh);
    let err = month_grid(&calendar, view, None).unwrap_err();
    assert_eq!(err, CalendarError::UnsupportedYear { year: 2085 });
}
