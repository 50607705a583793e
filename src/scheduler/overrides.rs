//! Override applier.
//!
//! Stamps caller-supplied vacation and leave dates and locks them. Dates
//! that do not parse or fall outside the period are ignored. A date in
//! both maps resolves by [`OverridePrecedence`]: the losing code is
//! stamped first and the winner overwrites it.

use tracing::trace;

use super::context::GridBuilder;
use crate::config::OverridePrecedence;
use crate::models::{OverrideMap, Period, ShiftCode};

/// Applies both override maps. Returns the number of locked cells.
pub(crate) fn apply_overrides(
    grid: &mut GridBuilder<'_>,
    period: Period,
    vacation: &OverrideMap,
    leave: &OverrideMap,
    precedence: OverridePrecedence,
) -> usize {
    let layers = match precedence {
        OverridePrecedence::VacationFirst => {
            [(leave, ShiftCode::Leave), (vacation, ShiftCode::Vacation)]
        }
        OverridePrecedence::LeaveFirst => {
            [(vacation, ShiftCode::Vacation), (leave, ShiftCode::Leave)]
        }
    };

    for (map, code) in layers {
        for row in 0..grid.employee_count() {
            let Some(dates) = map.get(&grid.employees[row].id) else {
                continue;
            };
            for date in dates {
                match period.day_index(date) {
                    Some(day) => grid.lock(row, day, code),
                    None => trace!(employee = %grid.employees[row].id, %date, "override outside period ignored"),
                }
            }
        }
    }

    (0..grid.employee_count())
        .map(|row| (0..grid.day_count()).filter(|&d| grid.is_locked(row, d)).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Position};
    use std::collections::BTreeSet;

    fn overrides(id: &str, dates: &[&str]) -> OverrideMap {
        let mut map = OverrideMap::new();
        map.insert(
            id.to_string(),
            dates.iter().map(|d| d.to_string()).collect::<BTreeSet<_>>(),
        );
        map
    }

    #[test]
    fn test_stamps_and_locks() {
        let staff = vec![Employee::new("B", "B", "B", Position::Gsc)];
        let period = Period::new(2025, 2).unwrap();
        let mut g = GridBuilder::new(period, &staff).unwrap();
        let vac = overrides("B", &["2025-02-10"]);
        let leave = overrides("B", &["2025-02-11", "2025-03-01", "garbage"]);

        let locked = apply_overrides(&mut g, period, &vac, &leave, OverridePrecedence::VacationFirst);
        assert_eq!(locked, 2);
        assert_eq!(g.cell(0, 9), Some(ShiftCode::Vacation));
        assert_eq!(g.cell(0, 10), Some(ShiftCode::Leave));
        assert!(g.is_locked(0, 9));
        assert!(g.is_locked(0, 10));
    }

    #[test]
    fn test_precedence_on_collision() {
        let staff = vec![Employee::new("B", "B", "B", Position::Gsc)];
        let period = Period::new(2025, 2).unwrap();
        let vac = overrides("B", &["2025-02-10"]);
        let leave = overrides("B", &["2025-02-10"]);

        let mut g = GridBuilder::new(period, &staff).unwrap();
        apply_overrides(&mut g, period, &vac, &leave, OverridePrecedence::VacationFirst);
        assert_eq!(g.cell(0, 9), Some(ShiftCode::Vacation));

        let mut g = GridBuilder::new(period, &staff).unwrap();
        apply_overrides(&mut g, period, &vac, &leave, OverridePrecedence::LeaveFirst);
        assert_eq!(g.cell(0, 9), Some(ShiftCode::Leave));
    }

    #[test]
    fn test_unknown_employee_ignored() {
        let staff = vec![Employee::new("B", "B", "B", Position::Gsc)];
        let period = Period::new(2025, 2).unwrap();
        let mut g = GridBuilder::new(period, &staff).unwrap();
        let vac = overrides("nobody", &["2025-02-10"]);
        let locked = apply_overrides(&mut g, period, &vac, &OverrideMap::new(), OverridePrecedence::VacationFirst);
        assert_eq!(locked, 0);
    }
}
