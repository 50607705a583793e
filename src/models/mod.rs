//! Roster domain models.
//!
//! Plain data types shared by the generator, validation and KPI code.
//!
//! # Shift Codes
//!
//! | Code | Label | Applies to |
//! |------|-------|------------|
//! | Morning | 7 | flexible |
//! | Afternoon | 15 | flexible |
//! | Night | 23 | flexible |
//! | FixedMorning | 9 | fixed |
//! | DayOff | 0 | all |
//! | Vacation | V | all (override) |
//! | Leave | L | all (override) |

mod calendar;
mod employee;
mod roster;
mod shift;

pub use calendar::{parse_iso_date, week_blocks, DayInfo, Period, SUNDAY, WEEKDAY_LABELS};
pub use employee::{roster_order, Employee, Position};
pub use roster::{OverrideMap, RosterGrid};
pub use shift::ShiftCode;
