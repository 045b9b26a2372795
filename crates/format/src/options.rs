//! Rendering options shared by all label builders.

use miti_numerals::to_devanagari;

/// Digit script for rendered numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitStyle {
    /// Devanagari digits, e.g. २०८०.
    #[default]
    Devanagari,
    /// ASCII digits, e.g. 2080.
    Ascii,
}

/// Weekday name length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayStyle {
    /// Bare name, e.g. सोम.
    #[default]
    Short,
    /// Name with the बार suffix, e.g. सोमबार.
    Full,
}

/// How dates and durations are rendered.
///
/// Defaults to Devanagari digits and short weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    digits: DigitStyle,
    weekday: WeekdayStyle,
}

impl FormatOptions {
    /// Creates options with the default rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the digit script.
    pub fn with_digits(mut self, digits: DigitStyle) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the weekday name length.
    pub fn with_weekday(mut self, weekday: WeekdayStyle) -> Self {
        self.weekday = weekday;
        self
    }

    /// Returns the digit script.
    pub fn digits(&self) -> DigitStyle {
        self.digits
    }

    /// Returns the weekday name length.
    pub fn weekday(&self) -> WeekdayStyle {
        self.weekday
    }
}

/// Renders a number in the configured digit script, without grouping.
pub fn digit_label(value: i64, options: &FormatOptions) -> String {
    let plain = value.to_string();
    match options.digits() {
        DigitStyle::Devanagari => to_devanagari(&plain),
        DigitStyle::Ascii => plain,
    }
}
