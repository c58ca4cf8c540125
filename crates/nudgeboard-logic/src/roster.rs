//! Departments and the employee record.
//!
//! The roster is a flat, immutable collection of [`Employee`] rows generated
//! once per session. Badge tier is deliberately **not** a field here — it is
//! always recomputed from `points` (see [`crate::badge`]) so the two can
//! never drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Hr,
    Sales,
    Finance,
    Tech,
    Legal,
    Operations,
    It,
}

impl Department {
    /// All department variants for iteration.
    pub const ALL: [Department; 7] = [
        Department::Hr,
        Department::Sales,
        Department::Finance,
        Department::Tech,
        Department::Legal,
        Department::Operations,
        Department::It,
    ];

    /// Dashboard label for this department.
    pub fn label(self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
            Department::Tech => "Tech",
            Department::Legal => "Legal",
            Department::Operations => "Operations",
            Department::It => "IT",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque stable identifier, unique per record.
    pub id: String,
    /// Display name.
    pub name: String,
    pub department: Department,
    /// Whether the compliance task is done.
    pub completed: bool,
    /// Points score; badge tier is derived from this, never stored.
    pub points: u32,
    /// Days until the compliance deadline; negative means overdue.
    pub due_in_days: i32,
    /// Per-employee completion percentage, present in the alternate roster
    /// schema only.
    pub completion_pct: Option<f32>,
}

impl Employee {
    /// Whether this employee's compliance task is past its deadline.
    pub fn is_overdue(&self) -> bool {
        self.due_in_days < 0
    }
}
