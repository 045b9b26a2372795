use miti_numerals::{
    NumeralError, format_grouped, group_ascii, parse_devanagari, to_ascii, to_devanagari,
};

#[test]
fn roundtrip_ascii_digit_strings() {
    let cases = ["0", "9", "2081", "1,234", "12,34,567", "page 3 of 10", ""];
    for s in cases {
        let dev = to_devanagari(s);
        assert_eq!(
            to_ascii(&dev),
            s,
            "roundtrip failed for {s:?}: devanagari={dev:?}"
        );
    }
}

#[test]
fn roundtrip_every_two_digit_number() {
    for n in 0..100u8 {
        let s = n.to_string();
        assert_eq!(to_ascii(&to_devanagari(&s)), s, "roundtrip failed for {n}");
    }
}

#[test]
fn grouped_output_parses_back() {
    let values: &[i64] = &[0, 7, 999, 1_000, 70_000, 123_456, 1_234_567, 123_456_789];
    for &v in values {
        let displayed = format_grouped(v);
        let parsed = parse_devanagari(&displayed)
            .unwrap_or_else(|e| panic!("parse failed for {v} ({displayed}): {e}"));
        assert_eq!(parsed, v as u64, "value changed through display: {displayed}");
    }
}

#[test]
fn grouping_matches_transliterated_ascii_grouping() {
    for &v in &[1_000i64, 123_456, 1_234_567, 10_000_000] {
        assert_eq!(format_grouped(v), to_devanagari(&group_ascii(v)));
    }
}

#[test]
fn double_conversion_is_harmless() {
    // Devanagari digits are outside the ASCII range, so a second pass
    // finds no ASCII digits to replace.
    let once = to_devanagari("12,34,567");
    assert_eq!(to_devanagari(&once), once);
}

#[test]
fn parse_surfaces_unexpected_characters() {
    let err = parse_devanagari("१२ किता").unwrap_err();
    assert!(matches!(
        err,
        NumeralError::UnexpectedCharacter { ch: ' ', position: 2 }
    ));
}
