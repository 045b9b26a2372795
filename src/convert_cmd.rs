//! Convert command: map a Gregorian date onto the Bikram Sambat calendar.

use anyhow::Result;
use tracing::{info, info_span};

use miti_convert::to_bs_with_weekday;
use miti_format::long_date;

use crate::cli::ConvertArgs;
use crate::config::MitiConfig;
use crate::convert::{build_format_options, parse_ad_date};
use crate::output::{self, DateOutput};

/// Convert one date.
pub fn run(args: ConvertArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let options = build_format_options(&config.display)?;
    let ad = parse_ad_date(&args.date)?;

    let (date, weekday) = to_bs_with_weekday(ad);
    info!(
        %ad,
        year = date.year(),
        month = date.month().number(),
        day = date.day(),
        "converted date"
    );

    let label = long_date(date, weekday, &options);
    if args.json {
        let view = DateOutput::new(ad, date, weekday, label, &options);
        println!("{}", output::to_json(&view)?);
    } else {
        println!("{label}");
    }
    Ok(())
}
