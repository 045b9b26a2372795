//! # miti-numerals
//!
//! Devanagari numeral display for Nepali-language UI: digit transliteration,
//! lakh/crore grouping, and the strict parse direction.
//!
//! ## Quick Start
//!
//! ```
//! use miti_numerals::{format_grouped, parse_devanagari, to_ascii, to_devanagari};
//!
//! // Digit transliteration, pass-through for everything else
//! assert_eq!(to_devanagari("2081"), "२०८१");
//! assert_eq!(to_ascii("२०८१"), "2081");
//!
//! // Counter display: lakh/crore grouping, then transliteration
//! assert_eq!(format_grouped(1_234_567), "१२,३४,५६७");
//!
//! // Parsing accepts either script plus separators
//! assert_eq!(parse_devanagari("१२,३४,५६७").unwrap(), 1_234_567);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `digits` | ASCII↔Devanagari digit mapping and numeral parsing |
//! | `grouping` | Lakh/crore group formatting |
//! | `error` | Error types |

mod digits;
mod error;
mod grouping;

pub use digits::{parse_devanagari, to_ascii, to_devanagari};
pub use error::NumeralError;
pub use grouping::{format_grouped, group_ascii};
