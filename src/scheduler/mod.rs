//! Roster generation pipeline and KPI evaluation.
//!
//! # Algorithm
//!
//! `RosterGenerator` runs seven passes over one generation-scoped grid:
//! overrides, weekly off-days, fixed 9 AM shifts, night blocks,
//! morning/afternoon alternation, gap filling and off-pair consolidation.
//! It never backtracks; days it cannot cover are filled by defaults.
//!
//! # KPI
//!
//! `RosterKpi` summarizes a finished roster: shift tallies, longest work
//! stretches and night coverage.

mod alternator;
mod context;
mod finish;
mod fixed;
mod generator;
mod kpi;
mod night;
mod off_days;
mod overrides;

pub use generator::{RosterGenerator, RosterRequest, RosterResponse};
pub use kpi::{RosterKpi, ShiftTally};

use crate::error::Result;
use crate::models::{Employee, OverrideMap, Period, RosterGrid};

/// Generates a roster with the default rules.
///
/// Shorthand for `RosterGenerator::new().generate(..)`.
pub fn generate(
    period: Period,
    employees: &[Employee],
    vacation: &OverrideMap,
    leave: &OverrideMap,
) -> Result<RosterGrid> {
    RosterGenerator::new().generate(period, employees, vacation, leave)
}
