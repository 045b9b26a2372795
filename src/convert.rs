//! Pure conversion functions: CLI strings and TOML config -> crate API types.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use miti_calendar::BsYearMonth;
use miti_format::{DigitStyle, FormatOptions, WeekdayStyle};
use miti_numerals::parse_devanagari;

use crate::config::DisplayConfig;

/// Parses a digit script name into the corresponding enum variant.
pub fn parse_numerals(s: &str) -> Result<DigitStyle> {
    match s.to_lowercase().as_str() {
        "devanagari" => Ok(DigitStyle::Devanagari),
        "ascii" => Ok(DigitStyle::Ascii),
        other => bail!("unknown digit script: {other:?}"),
    }
}

/// Parses a weekday length name into the corresponding enum variant.
pub fn parse_weekday_style(s: &str) -> Result<WeekdayStyle> {
    match s.to_lowercase().as_str() {
        "short" => Ok(WeekdayStyle::Short),
        "full" => Ok(WeekdayStyle::Full),
        other => bail!("unknown weekday style: {other:?}"),
    }
}

/// Builds [`FormatOptions`] from the TOML display configuration.
pub fn build_format_options(display: &DisplayConfig) -> Result<FormatOptions> {
    Ok(FormatOptions::new()
        .with_digits(parse_numerals(&display.numerals)?)
        .with_weekday(parse_weekday_style(&display.weekday)?))
}

/// Parses a Gregorian calendar date in `YYYY-MM-DD` form.
pub fn parse_ad_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

/// Resolves the optional `--year`/`--month` pair into a month view.
///
/// Both flags select a view, neither selects `None` so the caller can fall
/// back to the current month, and a lone flag is an error.
pub fn parse_view(year: Option<i32>, month: Option<u8>) -> Result<Option<BsYearMonth>> {
    match (year, month) {
        (Some(year), Some(month)) => Ok(Some(
            BsYearMonth::from_numbers(year, month).context("invalid month view")?,
        )),
        (None, None) => Ok(None),
        _ => bail!("--year and --month must be given together"),
    }
}

/// Parses an RFC 3339 timestamp and normalizes it to UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("invalid timestamp {s:?}, expected RFC 3339"))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Parses an integer that may use Devanagari digits, comma separators, and
/// a leading minus sign.
pub fn parse_number(s: &str) -> Result<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = parse_devanagari(digits).with_context(|| format!("invalid number {s:?}"))?;

    if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            return Ok(i64::MIN);
        }
        let value =
            i64::try_from(magnitude).with_context(|| format!("number out of range: {s:?}"))?;
        Ok(-value)
    } else {
        i64::try_from(magnitude).with_context(|| format!("number out of range: {s:?}"))
    }
}
