//! Night-shift rotator.
//!
//! # Algorithm
//!
//! A single night worker is on duty at a time. Walking the month in date
//! order, a new worker is chosen whenever there is none, the current one
//! has served a full block, or the current one has reached the monthly
//! cap. The choice is the first flexible employee in roster order who
//! - is below the monthly night cap, and
//! - has no locked or off-day cell in the window of up to one block
//!   length starting today.
//!
//! The worker gets Night on each day that is still unassigned. Days that
//! are already taken (off-day, override) still advance the block counter
//! and the monthly count. When nobody qualifies the day stays open for the
//! gap filler.

use tracing::trace;

use super::context::GridBuilder;
use crate::config::RosterConfig;
use crate::models::ShiftCode;

/// Assigns rotating night blocks. Returns cells written.
pub(crate) fn rotate_nights(grid: &mut GridBuilder<'_>, config: &RosterConfig) -> usize {
    let flexible = grid.flexible_rows();
    let block_length = config.night_block_length;
    let cap = config.night_monthly_cap;

    let mut current: Option<usize> = None;
    let mut served = 0u32;
    let mut written = 0;

    for day in 0..grid.day_count() {
        let needs_worker = current.map_or(true, |row| {
            served >= block_length || grid.rotation[row].nights_this_month >= cap
        });

        if needs_worker {
            let view: &GridBuilder<'_> = grid;
            current = flexible.iter().copied().find(|&row| {
                view.rotation[row].nights_this_month < cap
                    && window_is_clear(view, row, day, block_length)
            });
            served = 0;
            match current {
                Some(row) => trace!(
                    employee = %grid.employees[row].id,
                    date = %grid.days[day].date,
                    "night block started"
                ),
                None => trace!(date = %grid.days[day].date, "no night worker available"),
            }
        }

        let Some(row) = current else {
            continue;
        };

        if grid.fill_if_empty(row, day, ShiftCode::Night) {
            written += 1;
        }
        served += 1;
        grid.rotation[row].nights_this_month += 1;
    }

    written
}

/// Whether `row` has no locked or off-day cell in `[day, day + length)`.
fn window_is_clear(grid: &GridBuilder<'_>, row: usize, day: usize, length: u32) -> bool {
    let end = (day + length as usize).min(grid.day_count());
    (day..end).all(|d| !grid.is_locked(row, d) && grid.cell(row, d) != Some(ShiftCode::DayOff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Period, Position};

    fn flexible_staff(n: usize) -> Vec<Employee> {
        (0..n)
            .map(|i| Employee::new(format!("F{i}"), format!("N{i}"), "X", Position::Gsc))
            .collect()
    }

    fn nights(g: &GridBuilder<'_>, row: usize) -> Vec<usize> {
        (0..g.day_count())
            .filter(|&d| g.cell(row, d) == Some(ShiftCode::Night))
            .collect()
    }

    #[test]
    fn test_blocks_rotate_through_staff() {
        let staff = flexible_staff(3);
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        let written = rotate_nights(&mut g, &RosterConfig::default());

        assert_eq!(written, 15);
        assert_eq!(nights(&g, 0), vec![0, 1, 2, 3, 4]);
        assert_eq!(nights(&g, 1), vec![5, 6, 7, 8, 9]);
        assert_eq!(nights(&g, 2), vec![10, 11, 12, 13, 14]);
        // Everyone is capped after one block; the rest of the month stays open.
        assert!((15..28).all(|d| (0..3).all(|r| g.is_unassigned(r, d))));
    }

    #[test]
    fn test_lookahead_skips_upcoming_day_off() {
        let staff = flexible_staff(2);
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        g.set(0, 3, ShiftCode::DayOff);
        rotate_nights(&mut g, &RosterConfig::default());

        // F0 has an off-day inside the first window, so F1 takes the first block.
        assert_eq!(nights(&g, 1), vec![0, 1, 2, 3, 4]);
        // F0 picks up the next block.
        assert_eq!(nights(&g, 0), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_gap_when_nobody_eligible() {
        let staff = flexible_staff(1);
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        g.lock(0, 2, ShiftCode::Vacation);
        rotate_nights(&mut g, &RosterConfig::default());

        // Windows starting on days 0..=2 all contain the vacation day.
        assert!(g.is_unassigned(0, 0));
        assert!(g.is_unassigned(0, 1));
        assert_eq!(nights(&g, 0), vec![3, 4, 5, 6, 7]);
        assert_eq!(g.cell(0, 2), Some(ShiftCode::Vacation));
    }

    #[test]
    fn test_fixed_staff_never_on_nights() {
        let staff = vec![Employee::new("A", "A", "A", Position::Agsm)];
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        assert_eq!(rotate_nights(&mut g, &RosterConfig::default()), 0);
    }

    #[test]
    fn test_cap_below_block_length() {
        let staff = flexible_staff(2);
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        let config = RosterConfig::default().with_night_monthly_cap(3);
        rotate_nights(&mut g, &config);
        assert_eq!(nights(&g, 0), vec![0, 1, 2]);
        assert_eq!(nights(&g, 1), vec![3, 4, 5]);
    }
}
