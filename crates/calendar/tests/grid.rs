use miti_calendar::{
    approx_days_in_month, month_grid, ApproxBsCalendar, BsDate, BsMonth, BsYearMonth, Weekday,
};

#[test]
fn grid_is_complete_for_every_month() {
    for year in [2079, 2080, 2081, 2082] {
        for month in BsMonth::ALL {
            let view = BsYearMonth::new(year, month);
            let grid = month_grid(&ApproxBsCalendar, view, None).unwrap();
            let expected_days = approx_days_in_month(month);
            assert_eq!(
                grid.days_in_month(),
                expected_days,
                "day count mismatch for {view}"
            );

            let leading = usize::from(grid.start_weekday().index());
            assert_eq!(
                grid.cells().len(),
                leading + usize::from(expected_days),
                "cell count mismatch for {view}"
            );
            assert!(
                grid.cells()[..leading].iter().all(|cell| cell.is_empty()),
                "non-blank leading cell in {view}"
            );

            let days: Vec<u8> = grid.cells().iter().filter_map(|cell| cell.day()).collect();
            let expected: Vec<u8> = (1..=expected_days).collect();
            assert_eq!(days, expected, "day sequence mismatch for {view}");
        }
    }
}

#[test]
fn day_one_sits_in_the_start_weekday_column() {
    for year in [2080, 2081] {
        for month in BsMonth::ALL {
            let view = BsYearMonth::new(year, month);
            let grid = month_grid(&ApproxBsCalendar, view, None).unwrap();
            let first = grid
                .cells()
                .iter()
                .find(|cell| cell.day() == Some(1))
                .unwrap();
            assert_eq!(
                first.weekday(),
                grid.start_weekday(),
                "day 1 misaligned for {view}"
            );
        }
    }
}

#[test]
fn at_most_one_cell_is_today() {
    let today = BsDate::new(2080, BsMonth::Poush, 16).unwrap();
    for year in [2079, 2080, 2081] {
        for month in BsMonth::ALL {
            let view = BsYearMonth::new(year, month);
            let grid = month_grid(&ApproxBsCalendar, view, Some(today)).unwrap();
            let marked = grid.cells().iter().filter(|cell| cell.is_today()).count();
            let expected = usize::from(view.contains(today));
            assert_eq!(marked, expected, "today count mismatch for {view}");
        }
    }
}

#[test]
fn today_marks_the_matching_day_cell() {
    for day in 1..=30u8 {
        let today = BsDate::new(2081, BsMonth::Magh, day).unwrap();
        let view = today.year_month();
        let grid = month_grid(&ApproxBsCalendar, view, Some(today)).unwrap();
        let index = grid.today_index().unwrap();
        assert_eq!(
            grid.cells()[index].day(),
            Some(day),
            "today index points at the wrong cell for day {day}"
        );
    }
}

#[test]
fn same_inputs_build_the_same_grid() {
    let view = BsYearMonth::new(2080, BsMonth::Poush);
    let today = BsDate::new(2080, BsMonth::Poush, 16).unwrap();
    let first = month_grid(&ApproxBsCalendar, view, Some(today)).unwrap();
    let second = month_grid(&ApproxBsCalendar, view, Some(today)).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.today_index(), Some(20));
}

#[test]
fn weeks_never_exceed_seven_cells() {
    for month in BsMonth::ALL {
        let view = BsYearMonth::new(2082, month);
        let grid = month_grid(&ApproxBsCalendar, view, None).unwrap();
        let weeks: Vec<_> = grid.weeks().collect();
        assert!(
            weeks.iter().all(|week| week.len() <= 7),
            "oversized week in {view}"
        );
        let total: usize = weeks.iter().map(|week| week.len()).sum();
        assert_eq!(total, grid.cells().len(), "weeks drop cells in {view}");
    }
}

#[test]
fn short_month_with_today_mid_month() {
    let today = BsDate::from_numbers(2082, 11, 5).unwrap();
    let view = today.year_month();
    let grid = month_grid(&ApproxBsCalendar, view, Some(today)).unwrap();

    assert_eq!(grid.days_in_month(), 29);
    let day_cells = grid.cells().iter().filter(|cell| !cell.is_empty()).count();
    assert_eq!(day_cells, 29);

    let marked: Vec<_> = grid.cells().iter().filter(|cell| cell.is_today()).collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].day(), Some(5));
}

#[test]
fn start_weekday_matches_heuristic_inputs() {
    // 2080 % 7 = 1. Baisakh: (1 + 1 + 2) % 7 = 4, Poush: (1 + 2 + 2) % 7 = 5.
    let baisakh = month_grid(
        &ApproxBsCalendar,
        BsYearMonth::new(2080, BsMonth::Baisakh),
        None,
    )
    .unwrap();
    assert_eq!(baisakh.start_weekday(), Weekday::Thursday);

    let poush = month_grid(
        &ApproxBsCalendar,
        BsYearMonth::new(2080, BsMonth::Poush),
        None,
    )
    .unwrap();
    assert_eq!(poush.start_weekday(), Weekday::Friday);
}
