//! # miti-format
//!
//! Nepali-language labels for Bikram Sambat dates, month headings, and
//! elapsed time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use miti_calendar::{BsDate, BsMonth, Weekday};
//! use miti_format::{long_date, month_title, relative_time, FormatOptions};
//!
//! let options = FormatOptions::new();
//! let date = BsDate::new(2080, BsMonth::Poush, 16).unwrap();
//! assert_eq!(long_date(date, Weekday::Monday, &options), "१६ पौष २०८०, सोम");
//! assert_eq!(month_title(date.year_month(), &options), "पौष २०८०");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `options` | Digit script and weekday length selection |
//! | `date_label` | Long-form date and month-heading labels |
//! | `relative` | Coarse elapsed-time labels |

mod date_label;
mod options;
mod relative;

pub use date_label::{long_date, month_title, weekday_label};
pub use options::{digit_label, DigitStyle, FormatOptions, WeekdayStyle};
pub use relative::{elapsed_label, relative_time};
