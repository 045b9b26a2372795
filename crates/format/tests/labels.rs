use chrono::{TimeZone, Utc};
use miti_calendar::{BsDate, BsMonth, BsYearMonth, Weekday};
use miti_format::{
    elapsed_label, long_date, month_title, relative_time, DigitStyle, FormatOptions, WeekdayStyle,
};

fn is_devanagari_digit(c: char) -> bool {
    ('०'..='९').contains(&c)
}

#[test]
fn month_titles_are_distinct_across_the_year() {
    let options = FormatOptions::new();
    let mut titles: Vec<String> = BsMonth::ALL
        .into_iter()
        .map(|month| month_title(BsYearMonth::new(2080, month), &options))
        .collect();
    assert!(titles.iter().all(|title| title.ends_with(" २०८०")));
    titles.sort();
    titles.dedup();
    assert_eq!(titles.len(), 12, "month titles collide");
}

#[test]
fn full_weekday_labels_end_with_the_bar_suffix() {
    let options = FormatOptions::new().with_weekday(WeekdayStyle::Full);
    let date = BsDate::new(2080, BsMonth::Poush, 16).unwrap();
    for weekday in Weekday::ALL {
        let label = long_date(date, weekday, &options);
        assert!(
            label.ends_with("बार"),
            "full weekday missing suffix in {label}"
        );
    }
}

#[test]
fn default_labels_contain_no_ascii_digits() {
    let options = FormatOptions::new();
    let date = BsDate::new(2080, BsMonth::Poush, 16).unwrap();
    let labels = [
        long_date(date, Weekday::Monday, &options),
        month_title(date.year_month(), &options),
        elapsed_label(7_200, &options),
    ];
    for label in labels {
        assert!(
            label.chars().all(|c| !c.is_ascii_digit()),
            "ASCII digit leaked into {label}"
        );
    }
}

#[test]
fn ascii_labels_contain_no_devanagari_digits() {
    let options = FormatOptions::new().with_digits(DigitStyle::Ascii);
    let date = BsDate::new(2080, BsMonth::Poush, 16).unwrap();
    let labels = [
        long_date(date, Weekday::Monday, &options),
        month_title(date.year_month(), &options),
        elapsed_label(7_200, &options),
    ];
    for label in labels {
        assert!(
            !label.chars().any(is_devanagari_digit),
            "Devanagari digit leaked into {label}"
        );
    }
}

#[test]
fn notice_timestamps_read_naturally() {
    let options = FormatOptions::new();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let posted = Utc.with_ymd_and_hms(2023, 12, 29, 9, 30, 0).unwrap();
    assert_eq!(relative_time(posted, now, &options), "३ दिन अघि");

    let moments_ago = Utc.with_ymd_and_hms(2024, 1, 1, 11, 59, 20).unwrap();
    assert_eq!(relative_time(moments_ago, now, &options), "भर्खरै");
}
