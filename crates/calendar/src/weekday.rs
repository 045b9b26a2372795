//! Weekday enumeration with Nepali names, Sunday-first.

use std::fmt;

use crate::error::CalendarError;

/// Day of the week, indexed 0..=6 with 0 = Sunday.
///
/// The Sunday-first convention matches both the Gregorian weekday source
/// used during conversion and the left-to-right column order of the
/// rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// आइतबार, index 0.
    Sunday = 0,
    /// सोमबार, index 1.
    Monday = 1,
    /// मङ्गलबार, index 2.
    Tuesday = 2,
    /// बुधबार, index 3.
    Wednesday = 3,
    /// बिहीबार, index 4.
    Thursday = 4,
    /// शुक्रबार, index 5.
    Friday = 5,
    /// शनिबार, index 6, the Nepali weekly holiday.
    Saturday = 6,
}

impl Weekday {
    /// All seven weekdays in grid-column order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Creates a `Weekday` from a 0-based index (0 = Sunday).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `index` is not in 0..=6.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        match index {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            index => Err(CalendarError::InvalidWeekday { index }),
        }
    }

    /// Returns the 0-based index (matches the `#[repr(u8)]` discriminant).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the short Devanagari name, e.g. `"सोम"` for Monday.
    ///
    /// This is the form used in composed date strings and grid headers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "आइत",
            Self::Monday => "सोम",
            Self::Tuesday => "मङ्गल",
            Self::Wednesday => "बुध",
            Self::Thursday => "बिही",
            Self::Friday => "शुक्र",
            Self::Saturday => "शनि",
        }
    }

    /// Returns the full Devanagari name, e.g. `"सोमबार"` for Monday.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Sunday => "आइतबार",
            Self::Monday => "सोमबार",
            Self::Tuesday => "मङ्गलबार",
            Self::Wednesday => "बुधबार",
            Self::Thursday => "बिहीबार",
            Self::Friday => "शुक्रबार",
            Self::Saturday => "शनिबार",
        }
    }

    /// Returns the romanised Nepali weekday name, e.g. `"Sombar"`.
    pub fn latin_name(self) -> &'static str {
        match self {
            Self::Sunday => "Aaitabar",
            Self::Monday => "Sombar",
            Self::Tuesday => "Mangalbar",
            Self::Wednesday => "Budhabar",
            Self::Thursday => "Bihibar",
            Self::Friday => "Sukrabar",
            Self::Saturday => "Sanibar",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.latin_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_discriminant() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Monday.index(), 1);
        assert_eq!(Weekday::Saturday.index(), 6);
    }

    #[test]
    fn from_index_roundtrip_all_seven() {
        for weekday in Weekday::ALL {
            let back = Weekday::from_index(weekday.index()).unwrap();
            assert_eq!(back, weekday, "roundtrip failed for {weekday}");
        }
    }

    #[test]
    fn from_index_invalid_7() {
        assert_eq!(
            Weekday::from_index(7).unwrap_err(),
            CalendarError::InvalidWeekday { index: 7 }
        );
    }

    #[test]
    fn all_is_in_column_order() {
        for (i, weekday) in Weekday::ALL.iter().enumerate() {
            assert_eq!(weekday.index() as usize, i);
        }
    }

    #[test]
    fn monday_short_name() {
        assert_eq!(Weekday::Monday.name(), "सोम");
    }

    #[test]
    fn full_name_extends_short_name() {
        // Every full form is the short form plus the -बार suffix.
        for weekday in Weekday::ALL {
            let expected = format!("{}बार", weekday.name());
            assert_eq!(
                weekday.full_name(),
                expected,
                "full name mismatch for {weekday}"
            );
        }
    }

    #[test]
    fn display_uses_latin_name() {
        assert_eq!(Weekday::Sunday.to_string(), "Aaitabar");
        assert_eq!(Weekday::Saturday.to_string(), "Sanibar");
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<Weekday>();
        assert_hash::<Weekday>();
    }
}
