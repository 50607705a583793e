//! Shift code vocabulary.
//!
//! A closed set of codes. The serialized form is the compact label printed
//! on roster sheets (`"7"`, `"15"`, `"23"`, `"9"`, `"0"`, `"V"`, `"L"`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single roster cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftCode {
    /// Early shift (07:00).
    #[serde(rename = "7")]
    Morning,
    /// Late shift (15:00).
    #[serde(rename = "15")]
    Afternoon,
    /// Night shift (23:00).
    #[serde(rename = "23")]
    Night,
    /// Office-hours shift for fixed positions (09:00).
    #[serde(rename = "9")]
    FixedMorning,
    #[serde(rename = "0")]
    DayOff,
    #[serde(rename = "V")]
    Vacation,
    #[serde(rename = "L")]
    Leave,
}

impl ShiftCode {
    /// All codes, in display order.
    pub const ALL: [ShiftCode; 7] = [
        ShiftCode::Morning,
        ShiftCode::Afternoon,
        ShiftCode::Night,
        ShiftCode::FixedMorning,
        ShiftCode::DayOff,
        ShiftCode::Vacation,
        ShiftCode::Leave,
    ];

    /// Compact label as printed on the roster.
    pub fn code(self) -> &'static str {
        match self {
            Self::Morning => "7",
            Self::Afternoon => "15",
            Self::Night => "23",
            Self::FixedMorning => "9",
            Self::DayOff => "0",
            Self::Vacation => "V",
            Self::Leave => "L",
        }
    }

    /// Parses a compact label.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Whether this code comes from the caller's override maps.
    #[inline]
    pub fn is_override(self) -> bool {
        matches!(self, Self::Vacation | Self::Leave)
    }

    /// Whether this code is a working shift.
    #[inline]
    pub fn is_work(self) -> bool {
        matches!(
            self,
            Self::Morning | Self::Afternoon | Self::Night | Self::FixedMorning
        )
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
