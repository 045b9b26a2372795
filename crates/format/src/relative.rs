//! Coarse elapsed-time labels in Nepali.

use chrono::{DateTime, Utc};

use crate::options::{digit_label, FormatOptions};

const JUST_NOW: &str = "भर्खरै";

/// Describes how long ago `since` was, relative to `now`.
///
/// Anything under a minute ago, including timestamps in the future, comes
/// out as `भर्खरै`.
pub fn relative_time(since: DateTime<Utc>, now: DateTime<Utc>, options: &FormatOptions) -> String {
    elapsed_label(now.signed_duration_since(since).num_seconds(), options)
}

/// Renders an elapsed number of seconds as a coarse Nepali label.
///
/// The scale widens in stages: minutes under an hour, hours under a day,
/// days under a thirty-day month, months under a twelve-month year, then
/// years. Counts truncate toward zero at every stage.
pub fn elapsed_label(seconds: i64, options: &FormatOptions) -> String {
    if seconds < 60 {
        return JUST_NOW.to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "मिनेट", options);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "घण्टा", options);
    }
    let days = hours / 24;
    if days < 30 {
        return ago(days, "दिन", options);
    }
    let months = days / 30;
    if months < 12 {
        return ago(months, "महिना", options);
    }
    ago(months / 12, "वर्ष", options)
}

fn ago(count: i64, unit: &str, options: &FormatOptions) -> String {
    format!("{} {unit} अघि", digit_label(count, options))
}
