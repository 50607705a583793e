//! Fixed-shift assigner.

use super::context::GridBuilder;
use crate::models::ShiftCode;

/// Fills every remaining cell of fixed-position rows with the 9 AM shift.
pub(crate) fn assign_fixed_shifts(grid: &mut GridBuilder<'_>) -> usize {
    let mut written = 0;
    for row in grid.fixed_rows() {
        for day in 0..grid.day_count() {
            if grid.fill_if_empty(row, day, ShiftCode::FixedMorning) {
                written += 1;
            }
        }
    }
    written
}
