//! Employee model.
//!
//! Employees are immutable inputs to generation. Each holds a position
//! that decides which passes apply to it: fixed positions always work
//! the 9 AM shift, flexible positions rotate through morning, afternoon
//! and night.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Staff position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Assistant guest services manager (fixed).
    #[serde(rename = "AGSM")]
    Agsm,
    /// Guest services coordinator (flexible).
    #[serde(rename = "GSC")]
    Gsc,
    /// Guest services agent (flexible).
    #[serde(rename = "GSA")]
    Gsa,
    /// Welcome agent (fixed).
    #[serde(rename = "Welcome Agent")]
    WelcomeAgent,
}

impl Position {
    /// Ordering rank; lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Agsm => 0,
            Self::Gsc => 1,
            Self::Gsa => 2,
            Self::WelcomeAgent => 3,
        }
    }

    /// Whether this position always works the 9 AM shift.
    #[inline]
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Agsm | Self::WelcomeAgent)
    }

    /// Whether this position rotates through morning/afternoon/night.
    #[inline]
    pub fn is_flexible(self) -> bool {
        !self.is_fixed()
    }
}

/// A staff member on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub position: Position,
    /// Optional team tag (e.g. "NAFSIKA", "WELCOME AGENTS").
    #[serde(default)]
    pub group: Option<String>,
}

impl Employee {
    /// Creates a new employee.
    pub fn new(
        id: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            position,
            group: None,
        }
    }

    /// Sets the group tag.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Roster ordering: position rank, then last name.
    pub fn roster_cmp(&self, other: &Self) -> Ordering {
        self.position
            .rank()
            .cmp(&other.position.rank())
            .then_with(|| self.last_name.cmp(&other.last_name))
    }
}

/// Returns the employees in roster order.
///
/// The sort is stable, so employees sharing position and last name keep
/// their input order.
pub fn roster_order(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.roster_cmp(b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_kinds() {
        assert!(Position::Agsm.is_fixed());
        assert!(Position::WelcomeAgent.is_fixed());
        assert!(Position::Gsc.is_flexible());
        assert!(Position::Gsa.is_flexible());
    }

    #[test]
    fn test_roster_order() {
        let staff = vec![
            Employee::new("1", "Zeta", "A", Position::Gsa),
            Employee::new("2", "Alpha", "B", Position::WelcomeAgent),
            Employee::new("3", "Beta", "C", Position::Gsc),
            Employee::new("4", "Alpha", "D", Position::Gsa),
            Employee::new("5", "Omega", "E", Position::Agsm),
        ];
        let ids: Vec<&str> = roster_order(&staff).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "3", "4", "1", "2"]);
    }

    #[test]
    fn test_order_is_stable_on_ties() {
        let staff = vec![
            Employee::new("b", "Same", "X", Position::Gsc),
            Employee::new("a", "Same", "Y", Position::Gsc),
        ];
        let ids: Vec<&str> = roster_order(&staff).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_position_serde() {
        let e = Employee::new("1", "Doe", "Jane", Position::WelcomeAgent).with_group("LOBBY");
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains(r#""position":"Welcome Agent""#));
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_group_defaults_to_none() {
        let json = r#"{"id":"1","last_name":"Doe","first_name":"J","position":"GSC"}"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.group, None);
        assert_eq!(e.position, Position::Gsc);
    }
}
