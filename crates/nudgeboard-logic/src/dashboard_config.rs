//! Roster generation parameters and validation.
//!
//! Before a session starts, the caller describes the synthetic roster it
//! wants: which departments, how many people each, the point scale, the
//! deadline window, and the seed. This module provides the data model and
//! validation logic for that description, independent of any UI framework.
//!
//! ```
//! use nudgeboard_logic::dashboard_config::{validate_config, RosterConfig};
//!
//! let mut config = RosterConfig::default();
//! config.seed = 7;
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::roster::Department;

/// Rosters above this size are refused; the dashboard is interactive and a
/// few thousand rows is the intended ceiling.
pub const MAX_ROSTER_ROWS: u64 = 10_000;

/// Caller-editable roster description, consumed by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Seed for deterministic generation.
    pub seed: u64,
    /// Departments to populate.
    pub departments: Vec<Department>,
    /// Headcount per department.
    pub employees_per_department: u32,
    /// Points are drawn uniformly from `0..=points_max`.
    pub points_max: u32,
    /// Deadlines are drawn from `due_min..=due_max` days; negative = overdue.
    pub due_min: i32,
    pub due_max: i32,
    /// Also populate the alternate-schema per-employee completion
    /// percentage.
    pub with_completion_pct: bool,
}

impl Default for RosterConfig {
    /// The classic demo roster: five departments, ten people each,
    /// narrow 0–20 point scale, deadlines from 20 days overdue to 60 out.
    fn default() -> Self {
        Self {
            seed: 42,
            departments: vec![
                Department::Hr,
                Department::Sales,
                Department::Finance,
                Department::Tech,
                Department::Legal,
            ],
            employees_per_department: 10,
            points_max: 20,
            due_min: -20,
            due_max: 60,
            with_completion_pct: false,
        }
    }
}

impl RosterConfig {
    /// Total rows the generator will produce. Computed in `u64` so the
    /// ceiling check below cannot overflow on huge configs.
    pub fn total_rows(&self) -> u64 {
        self.departments.len() as u64 * u64::from(self.employees_per_department)
    }
}

/// Validate a roster config, returning human-readable problems.
/// An empty vec means the config is usable.
pub fn validate_config(config: &RosterConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if config.departments.is_empty() {
        problems.push("at least one department is required".to_string());
    }
    let mut seen = Vec::new();
    for dept in &config.departments {
        if seen.contains(dept) {
            problems.push(format!("department {dept} listed more than once"));
        } else {
            seen.push(*dept);
        }
    }
    if config.employees_per_department == 0 {
        problems.push("employees_per_department must be at least 1".to_string());
    }
    if config.points_max == 0 {
        problems.push("points_max must be at least 1".to_string());
    }
    if config.due_min > config.due_max {
        problems.push(format!(
            "due window is inverted ({}..={})",
            config.due_min, config.due_max
        ));
    }
    if config.total_rows() > MAX_ROSTER_ROWS {
        problems.push(format!(
            "roster of {} rows exceeds the {} row ceiling",
            config.total_rows(),
            MAX_ROSTER_ROWS
        ));
    }

    problems
}
