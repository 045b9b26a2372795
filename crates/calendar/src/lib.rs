//! # miti-calendar
//!
//! Pure date arithmetic for the Bikram Sambat calendar, built on a fixed
//! month-length approximation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["BsMonth (1..=12)"] -->|"approx_days_in_month()"| B["month length"]
//!     A -->|"BsDate::new()"| C["BsDate"]
//!     C -->|".year_month()"| D["BsYearMonth"]
//!     D -->|".next() / .prev()"| D
//!     D -->|"month_grid()"| E["MonthGrid"]
//!     F["BsCalendar impl"] -->|"month_grid()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use miti_calendar::{ApproxBsCalendar, BsDate, BsMonth, BsYearMonth, month_grid};
//!
//! // Validated dates
//! let today = BsDate::new(2080, BsMonth::Poush, 16).unwrap();
//!
//! // Month navigation wraps across year boundaries
//! let view = today.year_month();
//! assert_eq!(view.next().next().next().next(), BsYearMonth::new(2081, BsMonth::Baisakh));
//!
//! // Weekday-aligned month layout
//! let grid = month_grid(&ApproxBsCalendar, view, Some(today)).unwrap();
//! assert_eq!(grid.days_in_month(), 30);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | The twelve BS months with Devanagari and Latin names |
//! | `weekday` | Sunday-first weekdays with Devanagari and Latin names |
//! | `bs_date` | Validated BS date |
//! | `year_month` | Month navigation with year wrap-around |
//! | `approx` | Month-length table, start-weekday heuristic, provider trait |
//! | `grid` | Weekday-aligned month grid assembly |
//! | `error` | Error types |

mod approx;
mod bs_date;
mod error;
mod grid;
mod month;
mod weekday;
mod year_month;

pub use approx::{approx_days_in_month, approx_start_weekday, ApproxBsCalendar, BsCalendar};
pub use bs_date::BsDate;
pub use error::CalendarError;
pub use grid::{month_grid, CalendarCell, MonthGrid};
pub use month::BsMonth;
pub use weekday::Weekday;
pub use year_month::BsYearMonth;
