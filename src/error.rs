//! Error types for roster generation.
//!
//! Generation itself has exactly one hard failure, [`RosterError::InvalidPeriod`].
//! The remaining variants belong to configuration loading.

use thiserror::Error;

/// Errors raised by this crate.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Invalid period: year {year}, month {month}")]
    InvalidPeriod { year: i32, month: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RosterError>;
