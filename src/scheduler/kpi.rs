//! Roster quality metrics (KPIs).
//!
//! Descriptive numbers for a generated roster. They do not judge the
//! roster; coverage gaps are an accepted outcome of generation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Shift tally | Per-employee count of each code |
//! | Longest work stretch | Max consecutive working days per employee |
//! | Night-covered days | Dates with at least one Night |
//! | Night coverage rate | Night-covered days / days in month |

use std::collections::BTreeMap;

use crate::models::{DayInfo, RosterGrid, ShiftCode};

/// Count of each shift code in one employee's row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftTally {
    pub morning: usize,
    pub afternoon: usize,
    pub night: usize,
    pub fixed_morning: usize,
    pub day_off: usize,
    pub vacation: usize,
    pub leave: usize,
}

impl ShiftTally {
    fn record(&mut self, shift: ShiftCode) {
        let slot = match shift {
            ShiftCode::Morning => &mut self.morning,
            ShiftCode::Afternoon => &mut self.afternoon,
            ShiftCode::Night => &mut self.night,
            ShiftCode::FixedMorning => &mut self.fixed_morning,
            ShiftCode::DayOff => &mut self.day_off,
            ShiftCode::Vacation => &mut self.vacation,
            ShiftCode::Leave => &mut self.leave,
        };
        *slot += 1;
    }

    /// Days on a working shift.
    pub fn working_days(&self) -> usize {
        self.morning + self.afternoon + self.night + self.fixed_morning
    }
}

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Days in the period.
    pub day_count: usize,
    /// Per-employee shift tallies.
    pub tallies: BTreeMap<String, ShiftTally>,
    /// Per-employee longest run of consecutive working days.
    pub longest_work_stretch: BTreeMap<String, usize>,
    /// Dates with at least one Night assignment.
    pub night_covered_days: usize,
    /// `night_covered_days / day_count` (0.0 for an empty calendar).
    pub night_coverage_rate: f64,
}

impl RosterKpi {
    /// Computes KPIs from a grid and its calendar.
    pub fn calculate(grid: &RosterGrid, days: &[DayInfo]) -> Self {
        let mut tallies = BTreeMap::new();
        let mut longest_work_stretch = BTreeMap::new();

        for (id, row) in grid.rows() {
            let mut tally = ShiftTally::default();
            let mut run = 0usize;
            let mut longest = 0usize;
            for day in days {
                match row.get(&day.date) {
                    Some(&shift) => {
                        tally.record(shift);
                        if shift.is_work() {
                            run += 1;
                            longest = longest.max(run);
                        } else {
                            run = 0;
                        }
                    }
                    None => run = 0,
                }
            }
            tallies.insert(id.to_string(), tally);
            longest_work_stretch.insert(id.to_string(), longest);
        }

        let night_covered_days = days
            .iter()
            .filter(|day| {
                grid.rows()
                    .any(|(_, row)| row.get(&day.date) == Some(&ShiftCode::Night))
            })
            .count();

        let night_coverage_rate = if days.is_empty() {
            0.0
        } else {
            night_covered_days as f64 / days.len() as f64
        };

        Self {
            day_count: days.len(),
            tallies,
            longest_work_stretch,
            night_covered_days,
            night_coverage_rate,
        }
    }

    /// Whether the roster meets the given thresholds.
    pub fn meets_thresholds(&self, min_night_coverage: f64, max_work_stretch: usize) -> bool {
        self.night_coverage_rate >= min_night_coverage
            && self
                .longest_work_stretch
                .values()
                .all(|&stretch| stretch <= max_work_stretch)
    }
}
