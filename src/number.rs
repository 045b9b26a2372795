//! Number command: render an integer with Nepali digit grouping.

use anyhow::Result;
use tracing::{debug, info_span};

use miti_format::{digit_label, DigitStyle};
use miti_numerals::{format_grouped, group_ascii};

use crate::cli::NumberArgs;
use crate::config::MitiConfig;
use crate::convert::{build_format_options, parse_number};
use crate::output::{self, NumberOutput};

/// Render one number.
pub fn run(args: NumberArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("number").entered();
    let options = build_format_options(&config.display)?;

    let value = parse_number(&args.value)?;
    debug!(value, "parsed number");

    let label = if args.plain {
        digit_label(value, &options)
    } else {
        match options.digits() {
            DigitStyle::Devanagari => format_grouped(value),
            DigitStyle::Ascii => group_ascii(value),
        }
    };

    if args.json {
        let view = NumberOutput { value, label };
        println!("{}", output::to_json(&view)?);
    } else {
        println!("{label}");
    }
    Ok(())
}
