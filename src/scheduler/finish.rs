//! Gap filler and off-pair consolidator.
//!
//! The last two sub-passes. The gap filler gives every still-open cell a
//! position default, after which the grid is complete. The consolidator
//! then walks each row and turns lone off-days into pairs.

use super::context::GridBuilder;
use crate::models::ShiftCode;

/// Fills unassigned cells: 9 AM for fixed rows, Afternoon for flexible rows.
pub(crate) fn fill_gaps(grid: &mut GridBuilder<'_>) -> usize {
    let mut written = 0;
    for row in 0..grid.employee_count() {
        let default = if grid.employees[row].position.is_fixed() {
            ShiftCode::FixedMorning
        } else {
            ShiftCode::Afternoon
        };
        for day in 0..grid.day_count() {
            if grid.fill_if_empty(row, day, default) {
                written += 1;
            }
        }
    }
    written
}

/// Pairs up off-days. Returns the number of cells converted.
///
/// Scanning each row in date order, an off-day starts a pair with the next
/// day: if that day is already off the pair stands, if it is an override
/// the off-day stays single, otherwise it is converted to an off-day. The
/// scan resumes after the pair so conversions never cascade.
pub(crate) fn consolidate_off_pairs(grid: &mut GridBuilder<'_>) -> usize {
    let n = grid.day_count();
    let mut converted = 0;

    for row in 0..grid.employee_count() {
        let mut day = 0;
        while day < n {
            if grid.cell(row, day) != Some(ShiftCode::DayOff) || day + 1 >= n {
                day += 1;
                continue;
            }
            match grid.cell(row, day + 1) {
                Some(ShiftCode::DayOff) => day += 2,
                Some(next) if next.is_override() => day += 1,
                _ => {
                    if grid.set(row, day + 1, ShiftCode::DayOff) {
                        converted += 1;
                    }
                    day += 2;
                }
            }
        }
    }

    converted
}
