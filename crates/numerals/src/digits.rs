//! Digit transliteration between ASCII and Devanagari.

use crate::error::NumeralError;

/// Devanagari digit glyphs indexed by their numeric value (0..=9).
///
/// These are U+0966 through U+096F, the digits used for Nepali-language
/// numeric display.
pub(crate) const DEVANAGARI_DIGITS: [char; 10] =
    ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Returns the numeric value of a Devanagari digit glyph, if `ch` is one.
fn devanagari_value(ch: char) -> Option<u8> {
    let code = ch as u32;
    let zero = DEVANAGARI_DIGITS[0] as u32;
    if (zero..=zero + 9).contains(&code) {
        Some((code - zero) as u8)
    } else {
        None
    }
}

/// Replaces every ASCII digit with its Devanagari counterpart.
///
/// All other characters (separators, punctuation, letters, already-converted
/// Devanagari digits) pass through unchanged, so pre-formatted strings such
/// as `"1,234"` keep their separators. The function is pure and infallible.
///
/// # Examples
///
/// ```
/// assert_eq!(miti_numerals::to_devanagari("2081"), "२०८१");
/// assert_eq!(miti_numerals::to_devanagari("1,234"), "१,२३४");
/// assert_eq!(miti_numerals::to_devanagari("p. 12"), "p. १२");
/// ```
pub fn to_devanagari(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            if ch.is_ascii_digit() {
                DEVANAGARI_DIGITS[(ch as u8 - b'0') as usize]
            } else {
                ch
            }
        })
        .collect()
}

/// Replaces every Devanagari digit with its ASCII counterpart.
///
/// The exact inverse of [`to_devanagari`]: non-digit characters pass through
/// unchanged, so `to_ascii(to_devanagari(s)) == s` for any ASCII input `s`.
///
/// # Examples
///
/// ```
/// assert_eq!(miti_numerals::to_ascii("२०८१"), "2081");
/// assert_eq!(miti_numerals::to_ascii("१,२३४"), "1,234");
/// ```
pub fn to_ascii(input: &str) -> String {
    input
        .chars()
        .map(|ch| match devanagari_value(ch) {
            Some(d) => char::from(b'0' + d),
            None => ch,
        })
        .collect()
}

/// Parses a numeral string into a `u64`.
///
/// Accepts Devanagari digits, ASCII digits, and `,` group separators in any
/// mix, so both `"१२,३४,५६७"` and `"1234567"` parse to `1234567`. Separators
/// are not validated for position; they are simply skipped.
///
/// # Errors
///
/// Returns [`NumeralError::UnexpectedCharacter`] for any other character,
/// [`NumeralError::Empty`] if the input holds no digits, and
/// [`NumeralError::Overflow`] if the value exceeds `u64::MAX`.
pub fn parse_devanagari(input: &str) -> Result<u64, NumeralError> {
    let mut value: u64 = 0;
    let mut seen_digit = false;
    for (position, ch) in input.chars().enumerate() {
        let digit = if ch.is_ascii_digit() {
            ch as u8 - b'0'
        } else if let Some(d) = devanagari_value(ch) {
            d
        } else if ch == ',' {
            continue;
        } else {
            return Err(NumeralError::UnexpectedCharacter { ch, position });
        };
        seen_digit = true;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(NumeralError::Overflow)?;
    }
    if !seen_digit {
        return Err(NumeralError::Empty);
    }
    Ok(value)
}
