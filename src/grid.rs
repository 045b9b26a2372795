//! Grid command: lay out a Bikram Sambat month as a weekday grid.

use anyhow::Result;
use chrono::Local;
use tracing::{debug, info_span};

use miti_calendar::{month_grid, ApproxBsCalendar, MonthGrid, Weekday};
use miti_convert::to_bs;
use miti_format::{digit_label, month_title, FormatOptions};

use crate::cli::GridArgs;
use crate::config::MitiConfig;
use crate::convert::{build_format_options, parse_view};
use crate::output::{self, GridOutput};

/// Render one month of the BS calendar.
pub fn run(args: GridArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("grid").entered();
    let options = build_format_options(&config.display)?;

    let today = to_bs(Local::now().date_naive());
    let mut view = parse_view(args.year, args.month)?.unwrap_or_else(|| today.year_month());

    if args.offset >= 0 {
        for _ in 0..args.offset {
            view = view.next();
        }
    } else {
        for _ in 0..args.offset.unsigned_abs() {
            view = view.prev();
        }
    }
    debug!(%view, offset = args.offset, "resolved month view");

    let grid = month_grid(&ApproxBsCalendar, view, Some(today))?;
    let title = month_title(view, &options);

    if args.json {
        let output = GridOutput::new(&grid, title);
        println!("{}", output::to_json(&output)?);
    } else {
        print!("{}", render_text(&grid, &title, &options));
    }
    Ok(())
}

/// Lays the grid out as plain text, one week per line, with the current
/// day bracketed.
fn render_text(grid: &MonthGrid, title: &str, options: &FormatOptions) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let header: Vec<String> = Weekday::ALL
        .into_iter()
        .map(|w| format!("{:>5}", w.name()))
        .collect();
    out.push_str(header.concat().trim_end());
    out.push('\n');

    for week in grid.weeks() {
        let mut row = String::new();
        for cell in week {
            let text = match cell.day() {
                Some(day) => {
                    let digits = digit_label(i64::from(day), options);
                    if cell.is_today() {
                        format!("[{digits}]")
                    } else {
                        digits
                    }
                }
                None => String::new(),
            };
            row.push_str(&format!("{text:>5}"));
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
