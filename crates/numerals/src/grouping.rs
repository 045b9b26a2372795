//! South-Asian lakh/crore digit grouping.

use crate::digits::to_devanagari;

/// Groups an integer with `,` separators in the lakh/crore convention.
///
/// The rightmost group holds three digits; every group to its left holds
/// two, so `1234567` becomes `"12,34,567"` (बाह्र लाख / twelve lakh) rather
/// than the Western `"1,234,567"`. Values with at most three digits get no
/// separator. Negative values keep a leading `-`.
///
/// # Examples
///
/// ```
/// assert_eq!(miti_numerals::group_ascii(1_234_567), "12,34,567");
/// assert_eq!(miti_numerals::group_ascii(999), "999");
/// assert_eq!(miti_numerals::group_ascii(-70_000), "-70,000");
/// ```
pub fn group_ascii(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2 + 1);
    if n < 0 {
        grouped.push('-');
    }
    if digits.len() <= 3 {
        grouped.push_str(&digits);
        return grouped;
    }
    // Everything left of the final three digits splits into pairs from the
    // right, so the leftmost group may hold a single digit.
    let (head, tail) = digits.split_at(digits.len() - 3);
    let first = if head.len() % 2 == 1 { 1 } else { 2 };
    grouped.push_str(&head[..first]);
    let mut rest = &head[first..];
    while !rest.is_empty() {
        let (pair, remainder) = rest.split_at(2);
        grouped.push(',');
        grouped.push_str(pair);
        rest = remainder;
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

/// Groups an integer in the lakh/crore convention and transliterates it.
///
/// This is the display form used for counters and other adjacent numeric UI:
/// `1234567` becomes `"१२,३४,५६७"`.
///
/// # Examples
///
/// ```
/// assert_eq!(miti_numerals::format_grouped(1_234_567), "१२,३४,५६७");
/// assert_eq!(miti_numerals::format_grouped(42), "४२");
/// ```
pub fn format_grouped(n: i64) -> String {
    to_devanagari(&group_ascii(n))
}
