//! Off-day scheduler.
//!
//! # Algorithm
//!
//! For the employee at roster row `i`, the base offset is `i mod R`
//! (`R` = rotation, 5 by default). In week block `w` the target weekday
//! is `(base + w) mod R`, so off-days drift forward one weekday per week
//! and neighbouring employees are staggered.
//!
//! Within a block:
//! 1. Take the first unlocked day whose weekday is at or after the target
//!    and mark it off, then keep marking the following days of the block
//!    while they are unlocked, until the quota is met.
//! 2. If the quota is still short, top it up with the earliest unlocked
//!    days of the block, in date order.
//!
//! Short leading/trailing blocks may end with fewer off-days than the quota.

use tracing::trace;

use super::context::GridBuilder;
use crate::config::RosterConfig;
use crate::models::ShiftCode;

/// Places weekly off-days for every employee. Returns cells written.
pub(crate) fn schedule_off_days(grid: &mut GridBuilder<'_>, config: &RosterConfig) -> usize {
    let rotation = config.off_day_rotation as usize;
    let quota = config.off_days_per_week;
    let blocks = grid.blocks.clone();
    let mut written = 0;

    for row in 0..grid.employee_count() {
        let base = row % rotation;
        for (week, block) in blocks.iter().enumerate() {
            let target = ((base + week) % rotation) as u32;
            let mut placed = 0u32;

            let anchor = block
                .clone()
                .find(|&d| grid.days[d].weekday_index >= target && !grid.is_locked(row, d));
            if let Some(start) = anchor {
                let mut day = start;
                while placed < quota && day < block.end && !grid.is_locked(row, day) {
                    grid.set(row, day, ShiftCode::DayOff);
                    placed += 1;
                    day += 1;
                }
                trace!(
                    employee = %grid.employees[row].id,
                    week,
                    target,
                    start = %grid.days[start].date,
                    placed,
                    "off-day run placed"
                );
            }

            if placed < quota {
                trace!(
                    employee = %grid.employees[row].id,
                    week,
                    placed,
                    "off-day fallback placement"
                );
                for day in block.clone() {
                    if placed >= quota {
                        break;
                    }
                    if !grid.is_locked(row, day) && grid.cell(row, day) != Some(ShiftCode::DayOff) {
                        grid.set(row, day, ShiftCode::DayOff);
                        placed += 1;
                    }
                }
            }

            written += placed as usize;
        }
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Period, Position};

    fn off_days(g: &GridBuilder<'_>, row: usize) -> Vec<usize> {
        (0..g.day_count())
            .filter(|&d| g.cell(row, d) == Some(ShiftCode::DayOff))
            .collect()
    }

    #[test]
    fn test_first_employee_february_2025() {
        // Blocks: [Sat 1, Sun 2], [3..9], [10..16], [17..23], [24..28]
        let staff = vec![Employee::new("A", "A", "A", Position::Agsm)];
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        let written = schedule_off_days(&mut g, &RosterConfig::default());

        assert_eq!(written, 10);
        // week 0: target Mon, first day at/after is Sat 1 → Sat+Sun
        // week 1: target Tue → 4,5 ; week 2: Wed → 12,13 ; week 3: Thu → 20,21
        // week 4: target (0+4)%5 = Fri → 28 only, then fallback takes 24
        let days: Vec<usize> = off_days(&g, 0).into_iter().map(|d| d + 1).collect();
        assert_eq!(days, vec![1, 2, 4, 5, 12, 13, 20, 21, 24, 28]);
    }

    #[test]
    fn test_offsets_stagger_employees() {
        let staff: Vec<Employee> = (0..5)
            .map(|i| Employee::new(format!("E{i}"), format!("N{i}"), "X", Position::Gsc))
            .collect();
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        schedule_off_days(&mut g, &RosterConfig::default());

        // Week 2 (Mon 10th..Sun 16th): targets Wed, Thu, Fri, Mon, Tue
        let week2_first_off: Vec<usize> = (0..5)
            .map(|row| (9..16).find(|&d| g.cell(row, d) == Some(ShiftCode::DayOff)).unwrap())
            .map(|d| g.days[d].weekday_index as usize)
            .collect();
        assert_eq!(week2_first_off, vec![2, 3, 4, 0, 1]);
    }

    #[test]
    fn test_locked_cells_force_fallback() {
        let staff = vec![Employee::new("A", "A", "A", Position::Agsm)];
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        // Week 1 (3..9 Feb) targets Tuesday the 4th; lock the 5th
        g.lock(0, 4, ShiftCode::Leave);
        schedule_off_days(&mut g, &RosterConfig::default());

        let week1: Vec<usize> = (2..9)
            .filter(|&d| g.cell(0, d) == Some(ShiftCode::DayOff))
            .map(|d| d + 1)
            .collect();
        // Tue 4th from the preferred scan, then the earliest free day (Mon 3rd)
        assert_eq!(week1, vec![3, 4]);
        assert_eq!(g.cell(0, 4), Some(ShiftCode::Leave));
    }

    #[test]
    fn test_fully_locked_block_gets_nothing() {
        let staff = vec![Employee::new("A", "A", "A", Position::Agsm)];
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        for d in 2..9 {
            g.lock(0, d, ShiftCode::Vacation);
        }
        schedule_off_days(&mut g, &RosterConfig::default());
        assert!((2..9).all(|d| g.cell(0, d) == Some(ShiftCode::Vacation)));
    }

    #[test]
    fn test_custom_quota_and_rotation() {
        let staff = vec![Employee::new("A", "A", "A", Position::Agsm)];
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        let config = RosterConfig {
            off_days_per_week: 1,
            off_day_rotation: 7,
            ..Default::default()
        };
        let written = schedule_off_days(&mut g, &config);

        assert_eq!(written, 5);
        // Targets Mon, Tue, Wed, Thu, Fri for weeks 0..=4
        let days: Vec<usize> = off_days(&g, 0).into_iter().map(|d| d + 1).collect();
        assert_eq!(days, vec![1, 4, 12, 20, 28]);
    }

    #[test]
    fn test_two_per_full_week() {
        let staff: Vec<Employee> = (0..7)
            .map(|i| Employee::new(format!("E{i}"), format!("N{i}"), "X", Position::Gsa))
            .collect();
        let mut g = GridBuilder::new(Period::new(2025, 2).unwrap(), &staff).unwrap();
        schedule_off_days(&mut g, &RosterConfig::default());
        for row in 0..7 {
            for block in &g.blocks {
                let offs = block
                    .clone()
                    .filter(|&d| g.cell(row, d) == Some(ShiftCode::DayOff))
                    .count();
                assert_eq!(offs, 2, "row {row} block {block:?}");
            }
        }
    }
}
