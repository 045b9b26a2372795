//! Bikram Sambat month enumeration and its Devanagari names.

use std::fmt;

use crate::error::CalendarError;

/// The twelve months of the Bikram Sambat year, Baisakh through Chait.
///
/// The discriminant is the 1-based month number, so `BsMonth::Poush as u8`
/// is `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BsMonth {
    /// बैशाख, month 1 (mid-April onward).
    Baisakh = 1,
    /// जेठ, month 2.
    Jeth = 2,
    /// असार, month 3.
    Asar = 3,
    /// साउन, month 4.
    Saun = 4,
    /// भदौ, month 5.
    Bhadau = 5,
    /// असोज, month 6.
    Asoj = 6,
    /// कात्तिक, month 7.
    Kartik = 7,
    /// मंसिर, month 8.
    Mangsir = 8,
    /// पौष, month 9.
    Poush = 9,
    /// माघ, month 10.
    Magh = 10,
    /// फागुन, month 11.
    Falgun = 11,
    /// चैत, month 12, the last of the year.
    Chait = 12,
}

impl BsMonth {
    /// All twelve months in calendar order.
    pub const ALL: [BsMonth; 12] = [
        Self::Baisakh,
        Self::Jeth,
        Self::Asar,
        Self::Saun,
        Self::Bhadau,
        Self::Asoj,
        Self::Kartik,
        Self::Mangsir,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Chait,
    ];

    /// Creates a `BsMonth` from a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is not in 1..=12.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        match number {
            1 => Ok(Self::Baisakh),
            2 => Ok(Self::Jeth),
            3 => Ok(Self::Asar),
            4 => Ok(Self::Saun),
            5 => Ok(Self::Bhadau),
            6 => Ok(Self::Asoj),
            7 => Ok(Self::Kartik),
            8 => Ok(Self::Mangsir),
            9 => Ok(Self::Poush),
            10 => Ok(Self::Magh),
            11 => Ok(Self::Falgun),
            12 => Ok(Self::Chait),
            month => Err(CalendarError::InvalidMonth { month }),
        }
    }

    /// Returns the 1-based month number (matches the `#[repr(u8)]` discriminant).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the Devanagari month name, e.g. `"पौष"` for [`BsMonth::Poush`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Baisakh => "बैशाख",
            Self::Jeth => "जेठ",
            Self::Asar => "असार",
            Self::Saun => "साउन",
            Self::Bhadau => "भदौ",
            Self::Asoj => "असोज",
            Self::Kartik => "कात्तिक",
            Self::Mangsir => "मंसिर",
            Self::Poush => "पौष",
            Self::Magh => "माघ",
            Self::Falgun => "फागुन",
            Self::Chait => "चैत",
        }
    }

    /// Returns the romanised month name, e.g. `"Poush"`.
    pub fn latin_name(self) -> &'static str {
        match self {
            Self::Baisakh => "Baisakh",
            Self::Jeth => "Jeth",
            Self::Asar => "Asar",
            Self::Saun => "Saun",
            Self::Bhadau => "Bhadau",
            Self::Asoj => "Asoj",
            Self::Kartik => "Kartik",
            Self::Mangsir => "Mangsir",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chait => "Chait",
        }
    }
}

impl fmt::Display for BsMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.latin_name())
    }
}
