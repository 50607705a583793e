//! Monthly shift roster generation for 24/7 operations.
//!
//! Assigns exactly one shift code per employee per day for a target
//! month, honoring vacation/leave overrides, weekly off-days, night-block
//! rotation and rest-respecting morning/afternoon alternation.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `Position`, `Period`,
//!   `DayInfo`, `ShiftCode`, `RosterGrid`
//! - **`scheduler`**: The generation pipeline (`RosterGenerator`,
//!   `generate`) and roster KPIs
//! - **`validation`**: Advisory request checks (duplicate IDs, bad dates)
//! - **`config`**: Tunable rule constants, loadable from TOML
//!
//! # Example
//!
//! ```
//! use u_roster::models::{Employee, OverrideMap, Period, Position};
//!
//! let staff = vec![Employee::new("1", "Doe", "Jane", Position::Gsc)];
//! let grid = u_roster::generate(
//!     Period::new(2025, 2)?,
//!     &staff,
//!     &OverrideMap::new(),
//!     &OverrideMap::new(),
//! )?;
//! assert_eq!(grid.row("1").map(|r| r.len()), Some(28));
//! # Ok::<(), u_roster::RosterError>(())
//! ```
//!
//! Generation is pure and single-threaded; independent runs can execute
//! in parallel since each owns its grid and rotation state.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, RosterError};
pub use scheduler::generate;
