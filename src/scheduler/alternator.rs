//! Shift alternator.
//!
//! Fills the remaining flexible-employee cells with Morning or Afternoon.
//! Each employee leans toward one of the two for a week; the leaning flips
//! for everyone after each Sunday.
//!
//! # Transition Rule
//!
//! | yesterday | leaning | today |
//! |-----------|---------|-------|
//! | Morning | afternoon | Morning |
//! | Afternoon | morning | Afternoon |
//! | Night | any | Afternoon (leaning becomes afternoon) |
//! | other / none | any | leaning |
//!
//! "Yesterday" is whatever the cell held, including codes written by
//! earlier passes, so Afternoon is never followed by Morning and Night is
//! never followed by Morning.

use super::context::{GridBuilder, ShiftPreference};
use crate::models::{ShiftCode, SUNDAY};

/// Picks today's code and the leaning to carry forward.
fn next_shift(
    yesterday: Option<ShiftCode>,
    leaning: ShiftPreference,
) -> (ShiftCode, ShiftPreference) {
    match (yesterday, leaning) {
        (Some(ShiftCode::Morning), ShiftPreference::Afternoon) => (ShiftCode::Morning, leaning),
        (Some(ShiftCode::Afternoon), ShiftPreference::Morning) => (ShiftCode::Afternoon, leaning),
        (Some(ShiftCode::Night), _) => (ShiftCode::Afternoon, ShiftPreference::Afternoon),
        _ => (leaning.code(), leaning),
    }
}

/// Assigns morning/afternoon shifts. Returns cells written.
pub(crate) fn alternate_shifts(grid: &mut GridBuilder<'_>) -> usize {
    let flexible = grid.flexible_rows();
    let mut written = 0;

    for day in 0..grid.day_count() {
        for &row in &flexible {
            let shift = match grid.cell(row, day) {
                Some(existing) => existing,
                None => {
                    let state = grid.rotation[row];
                    let (shift, leaning) = next_shift(state.last_shift, state.preference);
                    grid.set(row, day, shift);
                    grid.rotation[row].preference = leaning;
                    written += 1;
                    shift
                }
            };
            grid.rotation[row].last_shift = Some(shift);
        }

        if grid.days[day].weekday_index == SUNDAY {
            for &row in &flexible {
                let state = &mut grid.rotation[row];
                state.preference = state.preference.flipped();
            }
        }
    }

    written
}
