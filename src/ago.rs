//! Ago command: describe how long ago a timestamp was.

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info_span};

use miti_format::relative_time;

use crate::cli::AgoArgs;
use crate::config::MitiConfig;
use crate::convert::{build_format_options, parse_timestamp};
use crate::output::{self, AgoOutput};

/// Render the elapsed-time label for a timestamp.
pub fn run(args: AgoArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("ago").entered();
    let options = build_format_options(&config.display)?;

    let since = parse_timestamp(&args.since)?;
    let now = match args.now.as_deref() {
        Some(s) => parse_timestamp(s)?,
        None => Utc::now(),
    };
    debug!(%since, %now, "resolved timestamps");

    let label = relative_time(since, now, &options);
    if args.json {
        let view = AgoOutput {
            since: args.since.clone(),
            seconds: now.signed_duration_since(since).num_seconds(),
            label,
        };
        println!("{}", output::to_json(&view)?);
    } else {
        println!("{label}");
    }
    Ok(())
}
