//! Error types for the miti-numerals crate.

/// Error type for the fallible numeral-parsing operations.
///
/// Rendering functions ([`to_devanagari`](crate::to_devanagari),
/// [`format_grouped`](crate::format_grouped)) are pass-through by contract
/// and never fail; only the parse direction reports errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// Returned when the input contains a character that is neither a
    /// Devanagari digit, an ASCII digit, nor a `,` group separator.
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based character index of the offending character.
        position: usize,
    },

    /// Returned when the input contains no digits at all.
    #[error("input contains no digits")]
    Empty,

    /// Returned when the parsed value does not fit in a `u64`.
    #[error("numeral does not fit in 64 bits")]
    Overflow,
}
