//! Rule configuration.
//!
//! Every rule constant the generator relies on lives in [`RosterConfig`].
//! The defaults are the house rules: two off-days per week rotating across
//! five weekdays, night blocks of at most five days, and at most five
//! nights per employee per month.
//!
//! # Loading
//!
//! ```
//! use u_roster::config::{OverridePrecedence, RosterConfig};
//!
//! let cfg = RosterConfig::from_toml_str(r#"
//!     night_monthly_cap = 6
//!     override_precedence = "leave_first"
//! "#).unwrap();
//! assert_eq!(cfg.night_monthly_cap, 6);
//! assert_eq!(cfg.night_block_length, 5);
//! assert_eq!(cfg.override_precedence, OverridePrecedence::LeaveFirst);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::models::ShiftCode;

/// Tie-break for a date present in both the vacation and leave maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverridePrecedence {
    /// Vacation wins over leave.
    #[default]
    VacationFirst,
    /// Leave wins over vacation.
    LeaveFirst,
}

impl OverridePrecedence {
    /// The code stamped when a date is in both maps.
    pub fn winner(self) -> ShiftCode {
        match self {
            Self::VacationFirst => ShiftCode::Vacation,
            Self::LeaveFirst => ShiftCode::Leave,
        }
    }
}

/// Tunable roster rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Maximum consecutive days in one night block.
    pub night_block_length: u32,
    /// Maximum nights per employee per month.
    pub night_monthly_cap: u32,
    /// Off-days placed per week block.
    pub off_days_per_week: u32,
    /// Number of weekdays the off-day target rotates through.
    pub off_day_rotation: u32,
    /// Precedence when a date is both vacation and leave.
    pub override_precedence: OverridePrecedence,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            night_block_length: 5,
            night_monthly_cap: 5,
            off_days_per_week: 2,
            off_day_rotation: 5,
            override_precedence: OverridePrecedence::VacationFirst,
        }
    }
}

impl RosterConfig {
    /// Parses a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Sets the night block length.
    pub fn with_night_block_length(mut self, days: u32) -> Self {
        self.night_block_length = days;
        self
    }

    /// Sets the monthly night cap.
    pub fn with_night_monthly_cap(mut self, nights: u32) -> Self {
        self.night_monthly_cap = nights;
        self
    }

    /// Sets the override tie-break.
    pub fn with_override_precedence(mut self, precedence: OverridePrecedence) -> Self {
        self.override_precedence = precedence;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.night_block_length == 0 {
            return Err(RosterError::InvalidConfig(
                "night_block_length must be at least 1".into(),
            ));
        }
        if self.night_monthly_cap == 0 {
            return Err(RosterError::InvalidConfig(
                "night_monthly_cap must be at least 1".into(),
            ));
        }
        if self.off_days_per_week == 0 || self.off_days_per_week > 7 {
            return Err(RosterError::InvalidConfig(format!(
                "off_days_per_week must be within 1..=7, got {}",
                self.off_days_per_week
            )));
        }
        if self.off_day_rotation == 0 || self.off_day_rotation > 7 {
            return Err(RosterError::InvalidConfig(format!(
                "off_day_rotation must be within 1..=7, got {}",
                self.off_day_rotation
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RosterConfig::default();
        assert_eq!(cfg.night_block_length, 5);
        assert_eq!(cfg.night_monthly_cap, 5);
        assert_eq!(cfg.off_days_per_week, 2);
        assert_eq!(cfg.off_day_rotation, 5);
        assert_eq!(cfg.override_precedence.winner(), ShiftCode::Vacation);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let cfg = RosterConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, RosterConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let cfg = RosterConfig::from_toml_str("night_block_length = 3").unwrap();
        assert_eq!(cfg.night_block_length, 3);
        assert_eq!(cfg.night_monthly_cap, 5);
    }

    #[test]
    fn test_rejects_zero_block() {
        let err = RosterConfig::from_toml_str("night_block_length = 0").unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_cap() {
        let err = RosterConfig::from_toml_str("night_monthly_cap = 0").unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_off_days() {
        let err = RosterConfig::from_toml_str("off_days_per_week = 0").unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfig(_)));

        let cfg = RosterConfig {
            off_days_per_week: 8,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_rotation() {
        let cfg = RosterConfig {
            off_day_rotation: 8,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = RosterConfig::from_toml_str("night_block_length = \"five\"").unwrap_err();
        assert!(matches!(err, RosterError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RosterConfig::from_file("/nonexistent/roster.toml").unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_leave_first() {
        let cfg = RosterConfig::default().with_override_precedence(OverridePrecedence::LeaveFirst);
        assert_eq!(cfg.override_precedence.winner(), ShiftCode::Leave);
    }
}
