//! Generation-scoped grid builder.
//!
//! Holds the working grid, the locked-cell mask and the per-employee
//! rotation state for a single generation run. Every pass borrows the
//! builder mutably in turn; nothing outlives the run.

use std::ops::Range;

use crate::error::Result;
use crate::models::{
    roster_order, week_blocks, DayInfo, Employee, Period, RosterGrid, ShiftCode,
};

/// Weekly morning/afternoon leaning of a flexible employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShiftPreference {
    Morning,
    Afternoon,
}

impl ShiftPreference {
    pub(crate) fn code(self) -> ShiftCode {
        match self {
            Self::Morning => ShiftCode::Morning,
            Self::Afternoon => ShiftCode::Afternoon,
        }
    }

    pub(crate) fn flipped(self) -> Self {
        match self {
            Self::Morning => Self::Afternoon,
            Self::Afternoon => Self::Morning,
        }
    }
}

/// Ephemeral rotation state for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RotationState {
    /// Code held on the most recently visited day.
    pub last_shift: Option<ShiftCode>,
    /// Current weekly preference (flexible employees only).
    pub preference: ShiftPreference,
    /// Night days charged this month.
    pub nights_this_month: u32,
}

/// Working grid for one generation run.
///
/// Rows follow roster order (position rank, then last name); row index
/// is the employee's position in that order.
#[derive(Debug)]
pub(crate) struct GridBuilder<'a> {
    pub days: Vec<DayInfo>,
    pub blocks: Vec<Range<usize>>,
    pub employees: Vec<&'a Employee>,
    pub rotation: Vec<RotationState>,
    cells: Vec<Vec<Option<ShiftCode>>>,
    locked: Vec<Vec<bool>>,
}

impl<'a> GridBuilder<'a> {
    /// Creates an empty grid for `employees` over `period`.
    pub fn new(period: Period, employees: &'a [Employee]) -> Result<Self> {
        let days = period.days()?;
        let blocks = week_blocks(&days);
        let employees = roster_order(employees);

        // Flexible employees alternate their starting preference in roster order.
        let mut flexible_seen = 0usize;
        let rotation = employees
            .iter()
            .map(|emp| {
                let preference = if emp.position.is_flexible() {
                    flexible_seen += 1;
                    if flexible_seen % 2 == 1 {
                        ShiftPreference::Morning
                    } else {
                        ShiftPreference::Afternoon
                    }
                } else {
                    ShiftPreference::Morning
                };
                RotationState {
                    last_shift: None,
                    preference,
                    nights_this_month: 0,
                }
            })
            .collect();

        let n = days.len();
        Ok(Self {
            cells: vec![vec![None; n]; employees.len()],
            locked: vec![vec![false; n]; employees.len()],
            days,
            blocks,
            employees,
            rotation,
        })
    }

    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    #[inline]
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Row indices of flexible-position employees, in roster order.
    pub fn flexible_rows(&self) -> Vec<usize> {
        self.rows_where(|emp| emp.position.is_flexible())
    }

    /// Row indices of fixed-position employees, in roster order.
    pub fn fixed_rows(&self) -> Vec<usize> {
        self.rows_where(|emp| emp.position.is_fixed())
    }

    fn rows_where(&self, pred: impl Fn(&Employee) -> bool) -> Vec<usize> {
        self.employees
            .iter()
            .enumerate()
            .filter(|(_, emp)| pred(**emp))
            .map(|(row, _)| row)
            .collect()
    }

    #[inline]
    pub fn cell(&self, row: usize, day: usize) -> Option<ShiftCode> {
        self.cells[row][day]
    }

    #[inline]
    pub fn is_locked(&self, row: usize, day: usize) -> bool {
        self.locked[row][day]
    }

    #[inline]
    pub fn is_unassigned(&self, row: usize, day: usize) -> bool {
        self.cells[row][day].is_none()
    }

    /// Stamps an override code and locks the cell.
    pub fn lock(&mut self, row: usize, day: usize, shift: ShiftCode) {
        self.cells[row][day] = Some(shift);
        self.locked[row][day] = true;
    }

    /// Writes a cell unless it is locked. Returns whether it was written.
    pub fn set(&mut self, row: usize, day: usize, shift: ShiftCode) -> bool {
        if self.locked[row][day] {
            return false;
        }
        self.cells[row][day] = Some(shift);
        true
    }

    /// Writes a cell only if it is still unassigned.
    pub fn fill_if_empty(&mut self, row: usize, day: usize, shift: ShiftCode) -> bool {
        self.is_unassigned(row, day) && self.set(row, day, shift)
    }

    /// Number of unassigned cells left in the grid.
    pub fn unassigned_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_none()).count()
    }

    /// Converts the working grid into the public roster grid.
    pub fn into_grid(self) -> RosterGrid {
        let mut grid = RosterGrid::new();
        for (row, emp) in self.employees.iter().enumerate() {
            for (day, info) in self.days.iter().enumerate() {
                if let Some(shift) = self.cells[row][day] {
                    grid.insert(emp.id.as_str(), info.date.as_str(), shift);
                }
            }
        }
        grid
    }
}
