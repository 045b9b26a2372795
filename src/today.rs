//! Today command: print the current date in the Bikram Sambat calendar.

use anyhow::Result;
use chrono::Local;
use tracing::{debug, info_span};

use miti_convert::to_bs_with_weekday;
use miti_format::long_date;

use crate::cli::TodayArgs;
use crate::config::MitiConfig;
use crate::convert::build_format_options;
use crate::output::{self, DateOutput};

/// Print today's BS date.
pub fn run(args: TodayArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let options = build_format_options(&config.display)?;

    let ad = Local::now().date_naive();
    debug!(%ad, "resolved current date");

    let (date, weekday) = to_bs_with_weekday(ad);
    let label = long_date(date, weekday, &options);

    if args.json {
        let view = DateOutput::new(ad, date, weekday, label, &options);
        println!("{}", output::to_json(&view)?);
    } else {
        println!("{label}");
    }
    Ok(())
}
