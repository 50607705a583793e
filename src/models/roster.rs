//! Roster grid (solution) model.
//!
//! The grid maps employee id → ISO date → shift code. Both levels are
//! `BTreeMap`s so iteration and serialized output are stable.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::ShiftCode;

/// Per-employee set of ISO dates (vacation or leave).
pub type OverrideMap = BTreeMap<String, BTreeSet<String>>;

/// A generated monthly roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterGrid {
    rows: BTreeMap<String, BTreeMap<String, ShiftCode>>,
}

impl RosterGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one cell.
    pub fn insert(
        &mut self,
        employee_id: impl Into<String>,
        date: impl Into<String>,
        shift: ShiftCode,
    ) {
        self.rows
            .entry(employee_id.into())
            .or_default()
            .insert(date.into(), shift);
    }

    /// Reads one cell.
    pub fn get(&self, employee_id: &str, date: &str) -> Option<ShiftCode> {
        self.rows.get(employee_id)?.get(date).copied()
    }

    /// Returns an employee's row, keyed by date.
    pub fn row(&self, employee_id: &str) -> Option<&BTreeMap<String, ShiftCode>> {
        self.rows.get(employee_id)
    }

    /// Iterates rows in employee-id order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, ShiftCode>)> {
        self.rows.iter().map(|(id, row)| (id.as_str(), row))
    }

    /// Employee ids present in the grid.
    pub fn employee_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells in an employee's row holding `shift`.
    pub fn count(&self, employee_id: &str, shift: ShiftCode) -> usize {
        self.row(employee_id)
            .map(|row| row.values().filter(|&&s| s == shift).count())
            .unwrap_or(0)
    }

    /// Dates on which `shift` is held by at least one employee.
    pub fn dates_with(&self, shift: ShiftCode) -> BTreeSet<&str> {
        self.rows
            .values()
            .flat_map(|row| row.iter())
            .filter(|(_, s)| **s == shift)
            .map(|(date, _)| date.as_str())
            .collect()
    }
}
