//! JSON output structures for command results.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use miti_calendar::{BsDate, MonthGrid, Weekday};
use miti_format::{weekday_label, FormatOptions};

/// A converted date with its formatted label.
#[derive(Debug, Serialize)]
pub struct DateOutput {
    pub ad_date: String,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub month_name: String,
    pub weekday: String,
    pub label: String,
}

impl DateOutput {
    /// Builds the JSON view of a converted date.
    pub fn new(
        ad: NaiveDate,
        date: BsDate,
        weekday: Weekday,
        label: String,
        options: &FormatOptions,
    ) -> Self {
        Self {
            ad_date: ad.to_string(),
            year: date.year(),
            month: date.month().number(),
            day: date.day(),
            month_name: date.month().name().to_string(),
            weekday: weekday_label(weekday, options).to_string(),
            label,
        }
    }
}

/// A laid-out month.
#[derive(Debug, Serialize)]
pub struct GridOutput {
    pub year: i32,
    pub month: u8,
    pub title: String,
    pub start_weekday: u8,
    pub days_in_month: u8,
    /// Rows of at most seven cells, Sunday first.
    pub weeks: Vec<Vec<CellOutput>>,
}

impl GridOutput {
    /// Builds the JSON view of a month grid.
    pub fn new(grid: &MonthGrid, title: String) -> Self {
        let weeks = grid
            .weeks()
            .map(|week| {
                week.iter()
                    .map(|cell| CellOutput {
                        day: cell.day(),
                        today: cell.is_today(),
                    })
                    .collect()
            })
            .collect();
        Self {
            year: grid.view().year(),
            month: grid.view().month().number(),
            title,
            start_weekday: grid.start_weekday().index(),
            days_in_month: grid.days_in_month(),
            weeks,
        }
    }
}

/// One grid cell; leading blanks carry no day.
#[derive(Debug, Clone, Serialize)]
pub struct CellOutput {
    pub day: Option<u8>,
    pub today: bool,
}

/// A relative-time label.
#[derive(Debug, Serialize)]
pub struct AgoOutput {
    pub since: String,
    pub seconds: i64,
    pub label: String,
}

/// A rendered number.
#[derive(Debug, Serialize)]
pub struct NumberOutput {
    pub value: i64,
    pub label: String,
}

/// Serialize a command result to a JSON string.
pub fn to_json<T: Serialize>(output: &T) -> Result<String> {
    serde_json::to_string_pretty(output).context("failed to serialize output")
}
