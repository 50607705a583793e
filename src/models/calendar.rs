//! Calendar resolution for a target month.
//!
//! Turns a `(year, month)` pair into an ordered list of day descriptors and
//! partitions them into Monday-aligned week blocks.
//!
//! # Weekday Normalization
//! Weekdays are indexed Monday = 0 … Sunday = 6. Week blocks start on
//! every Monday; the first block starts on day 1 whatever its weekday,
//! so leading and trailing blocks may be short.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Result, RosterError};

/// Three-letter weekday labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Weekday index of Sunday; closes a week block.
pub const SUNDAY: u32 = 6;

/// A target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    /// Month number, 1–12.
    pub month: u32,
}

/// One day of the target month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    /// Day of month, starting at 1.
    pub day: u32,
    /// ISO date key (`YYYY-MM-DD`).
    pub date: String,
    /// Monday = 0 … Sunday = 6.
    pub weekday_index: u32,
    /// Three-letter label (`MON` … `SUN`).
    pub weekday: String,
}

impl Period {
    /// Creates a validated period.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let period = Self { year, month };
        period.first_day()?;
        Ok(period)
    }

    fn invalid(&self) -> RosterError {
        RosterError::InvalidPeriod {
            year: self.year,
            month: self.month,
        }
    }

    fn first_day(&self) -> Result<NaiveDate> {
        if self.year <= 0 || !(1..=12).contains(&self.month) {
            return Err(self.invalid());
        }
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| self.invalid())
    }

    /// Number of days in the month.
    pub fn day_count(&self) -> Result<u32> {
        let first = self.first_day()?;
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .ok_or_else(|| self.invalid())?;
        Ok(next.signed_duration_since(first).num_days() as u32)
    }

    /// Resolves every day of the month, in date order.
    pub fn days(&self) -> Result<Vec<DayInfo>> {
        let first = self.first_day()?;
        let count = self.day_count()?;
        Ok(first
            .iter_days()
            .take(count as usize)
            .map(|date| {
                let weekday_index = date.weekday().num_days_from_monday();
                DayInfo {
                    day: date.day(),
                    date: date.format("%Y-%m-%d").to_string(),
                    weekday_index,
                    weekday: WEEKDAY_LABELS[weekday_index as usize].to_string(),
                }
            })
            .collect())
    }

    /// Zero-based day index of an ISO date, if it falls inside this month.
    pub fn day_index(&self, iso_date: &str) -> Option<usize> {
        let date = parse_iso_date(iso_date)?;
        if date.year() == self.year && date.month() == self.month {
            Some(date.day0() as usize)
        } else {
            None
        }
    }
}

/// Parses a zero-padded `YYYY-MM-DD` date.
///
/// chrono accepts unpadded fields such as `2025-2-10`; those are rejected
/// here so every accepted key matches the grid's date keys exactly.
pub fn parse_iso_date(iso_date: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(iso_date, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == iso_date).then_some(date)
}

/// Partitions a month into Monday-aligned week blocks of day indices.
pub fn week_blocks(days: &[DayInfo]) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut start = 0;
    for (idx, day) in days.iter().enumerate() {
        if idx > start && day.weekday_index == 0 {
            blocks.push(start..idx);
            start = idx;
        }
    }
    if start < days.len() {
        blocks.push(start..days.len());
    }
    blocks
}
