//! Roster generator front-end.
//!
//! # Pipeline
//!
//! 1. Resolve the calendar and sort employees into roster order.
//! 2. Stamp and lock vacation/leave overrides.
//! 3. Place weekly off-days.
//! 4. Fill fixed-position rows with the 9 AM shift.
//! 5. Rotate night blocks among flexible employees.
//! 6. Alternate morning/afternoon for the remaining flexible cells.
//! 7. Fill gaps with position defaults, then pair up lone off-days.
//!
//! Each pass only fills cells left open by earlier passes; locked cells
//! are never touched. The run is deterministic for identical inputs.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::alternator::alternate_shifts;
use super::context::GridBuilder;
use super::finish::{consolidate_off_pairs, fill_gaps};
use super::fixed::assign_fixed_shifts;
use super::night::rotate_nights;
use super::off_days::schedule_off_days;
use super::overrides::apply_overrides;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::models::{DayInfo, Employee, OverrideMap, Period, RosterGrid};

/// Input container for roster generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    pub year: i32,
    pub month: u32,
    /// Employees to roster; order breaks ties in roster order.
    pub employees: Vec<Employee>,
    /// Employee id → vacation dates.
    #[serde(default)]
    pub vacation_days: OverrideMap,
    /// Employee id → leave dates.
    #[serde(default)]
    pub leave_days: OverrideMap,
}

impl RosterRequest {
    /// Creates a request with no overrides.
    pub fn new(year: i32, month: u32, employees: Vec<Employee>) -> Self {
        Self {
            year,
            month,
            employees,
            vacation_days: OverrideMap::new(),
            leave_days: OverrideMap::new(),
        }
    }

    /// Adds a vacation date for an employee.
    pub fn with_vacation(mut self, employee_id: impl Into<String>, date: impl Into<String>) -> Self {
        self.vacation_days
            .entry(employee_id.into())
            .or_default()
            .insert(date.into());
        self
    }

    /// Adds a leave date for an employee.
    pub fn with_leave(mut self, employee_id: impl Into<String>, date: impl Into<String>) -> Self {
        self.leave_days
            .entry(employee_id.into())
            .or_default()
            .insert(date.into());
        self
    }
}

/// Generated roster with its calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterResponse {
    pub year: i32,
    pub month: u32,
    pub roster: RosterGrid,
    pub days_info: Vec<DayInfo>,
}

/// Deterministic multi-pass roster generator.
///
/// # Example
///
/// ```
/// use u_roster::models::{Employee, OverrideMap, Period, Position, ShiftCode};
/// use u_roster::scheduler::RosterGenerator;
///
/// let staff = vec![
///     Employee::new("A", "Adams", "Ann", Position::Agsm),
///     Employee::new("B", "Baker", "Bob", Position::Gsc),
/// ];
/// let mut vacation = OverrideMap::new();
/// vacation.entry("B".into()).or_default().insert("2025-02-10".into());
///
/// let grid = RosterGenerator::new()
///     .generate(Period::new(2025, 2).unwrap(), &staff, &vacation, &OverrideMap::new())
///     .unwrap();
/// assert_eq!(grid.get("B", "2025-02-10"), Some(ShiftCode::Vacation));
/// assert_eq!(grid.row("A").unwrap().len(), 28);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterGenerator {
    config: RosterConfig,
}

impl RosterGenerator {
    /// Creates a generator with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rule configuration.
    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Generates the roster grid for `period`.
    ///
    /// Fails only with [`crate::RosterError::InvalidPeriod`] (or
    /// `InvalidConfig` if the configuration was built by hand with
    /// unusable values).
    pub fn generate(
        &self,
        period: Period,
        employees: &[Employee],
        vacation: &OverrideMap,
        leave: &OverrideMap,
    ) -> Result<RosterGrid> {
        self.config.validate()?;
        let mut grid = GridBuilder::new(period, employees)?;
        info!(
            year = period.year,
            month = period.month,
            employees = employees.len(),
            days = grid.day_count(),
            "generating roster"
        );

        let locked = apply_overrides(
            &mut grid,
            period,
            vacation,
            leave,
            self.config.override_precedence,
        );
        debug!(pass = "overrides", cells = locked, "pass complete");

        let written = schedule_off_days(&mut grid, &self.config);
        debug!(pass = "off_days", cells = written, "pass complete");

        let written = assign_fixed_shifts(&mut grid);
        debug!(pass = "fixed", cells = written, "pass complete");

        let written = rotate_nights(&mut grid, &self.config);
        debug!(pass = "nights", cells = written, "pass complete");

        let written = alternate_shifts(&mut grid);
        debug!(pass = "alternator", cells = written, "pass complete");

        let written = fill_gaps(&mut grid);
        debug!(
            pass = "gap_fill",
            cells = written,
            remaining = grid.unassigned_count(),
            "pass complete"
        );

        let written = consolidate_off_pairs(&mut grid);
        debug!(pass = "off_pairs", cells = written, "pass complete");

        let roster = grid.into_grid();
        info!(employees = roster.len(), "roster generated");
        Ok(roster)
    }

    /// Generates from a request, returning the grid with its calendar.
    pub fn generate_request(&self, request: &RosterRequest) -> Result<RosterResponse> {
        let period = Period::new(request.year, request.month)?;
        let roster = self.generate(
            period,
            &request.employees,
            &request.vacation_days,
            &request.leave_days,
        )?;
        Ok(RosterResponse {
            year: request.year,
            month: request.month,
            roster,
            days_info: period.days()?,
        })
    }
}
