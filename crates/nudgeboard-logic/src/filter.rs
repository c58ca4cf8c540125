//! Filter selection and the filter/aggregate pipeline.
//!
//! The pipeline is one pure transform: (roster, selection) in, (filtered
//! rows, metrics) out. The three predicates — department membership, points
//! range, badge tier — compose with logical AND and are each independent, so
//! application order never changes the result. An empty result set is a
//! valid outcome, never an error.
//!
//! ```
//! use nudgeboard_logic::badge::BadgeThresholds;
//! use nudgeboard_logic::filter::{apply_filters, FilterSelection};
//! use nudgeboard_logic::roster::Department;
//!
//! let selection = FilterSelection {
//!     departments: vec![Department::Hr],
//!     ..FilterSelection::default()
//! };
//! let outcome = apply_filters(&[], &selection, &BadgeThresholds::default());
//! assert_eq!(outcome.metrics.employee_count, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::badge::{classify, Badge, BadgeThresholds};
use crate::metrics::{compute_metrics, DashboardMetrics};
use crate::roster::{Department, Employee};

/// The viewer's current filter constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Departments to keep. Empty means "All"; a single element gives
    /// single-select semantics, several give multi-select.
    pub departments: Vec<Department>,
    /// Inclusive lower bound on points.
    pub points_min: u32,
    /// Inclusive upper bound on points.
    pub points_max: u32,
    /// Badge tier to keep; `None` means "All".
    pub badge: Option<Badge>,
}

impl FilterSelection {
    /// Selection that keeps every row: all departments, the full points
    /// range, any badge.
    pub fn all() -> Self {
        Self {
            departments: Vec::new(),
            points_min: 0,
            points_max: u32::MAX,
            badge: None,
        }
    }

    /// Whether one row satisfies all three predicates.
    pub fn matches(&self, employee: &Employee, thresholds: &BadgeThresholds) -> bool {
        self.matches_department(employee)
            && self.matches_points(employee)
            && self.matches_badge(employee, thresholds)
    }

    fn matches_department(&self, employee: &Employee) -> bool {
        self.departments.is_empty() || self.departments.contains(&employee.department)
    }

    fn matches_points(&self, employee: &Employee) -> bool {
        employee.points >= self.points_min && employee.points <= self.points_max
    }

    fn matches_badge(&self, employee: &Employee, thresholds: &BadgeThresholds) -> bool {
        match self.badge {
            None => true,
            Some(badge) => classify(employee.points, thresholds) == badge,
        }
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Result of one pipeline run: the surviving rows plus their metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub rows: Vec<Employee>,
    pub metrics: DashboardMetrics,
}

/// Run the filter/aggregate pipeline.
///
/// Returns the subset of `roster` satisfying every predicate in `selection`,
/// with metrics computed over that subset (not the full roster). The input
/// is never mutated; filtering an already-filtered set with the same
/// selection changes nothing.
pub fn apply_filters(
    roster: &[Employee],
    selection: &FilterSelection,
    thresholds: &BadgeThresholds,
) -> FilterOutcome {
    let rows: Vec<Employee> = roster
        .iter()
        .filter(|e| selection.matches(e, thresholds))
        .cloned()
        .collect();
    let metrics = compute_metrics(&rows, thresholds);
    FilterOutcome { rows, metrics }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: &str, dept: Department, points: u32) -> Employee {
        Employee {
            id: id.into(),
            name: format!("{dept}_{id}"),
            department: dept,
            completed: points % 2 == 0,
            points,
            due_in_days: points as i32 - 10,
            completion_pct: None,
        }
    }

    fn sample_roster() -> Vec<Employee> {
        vec![
            emp("a1", Department::Hr, 0),
            emp("a2", Department::Hr, 8),
            emp("a3", Department::Sales, 15),
            emp("a4", Department::Finance, 3),
            emp("a5", Department::Tech, 20),
        ]
    }

    #[test]
    fn all_selection_keeps_everything() {
        let roster = sample_roster();
        let outcome = apply_filters(&roster, &FilterSelection::all(), &BadgeThresholds::default());
        assert_eq!(outcome.rows, roster);
    }

    #[test]
    fn department_single_select() {
        let roster = sample_roster();
        let selection = FilterSelection {
            departments: vec![Department::Hr],
            ..FilterSelection::all()
        };
        let outcome = apply_filters(&roster, &selection, &BadgeThresholds::default());
        assert_eq!(outcome.rows.len(), 2);
        assert!(outcome.rows.iter().all(|e| e.department == Department::Hr));
    }

    #[test]
    fn department_multi_select() {
        let roster = sample_roster();
        let selection = FilterSelection {
            departments: vec![Department::Hr, Department::Tech],
            ..FilterSelection::all()
        };
        let outcome = apply_filters(&roster, &selection, &BadgeThresholds::default());
        assert_eq!(outcome.rows.len(), 3);
    }

    #[test]
    fn points_range_is_inclusive() {
        let roster = sample_roster();
        let selection = FilterSelection {
            points_min: 8,
            points_max: 15,
            ..FilterSelection::all()
        };
        let outcome = apply_filters(&roster, &selection, &BadgeThresholds::default());
        let points: Vec<u32> = outcome.rows.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![8, 15]);
    }

    #[test]
    fn badge_filter_exact_match() {
        let roster = sample_roster();
        let selection = FilterSelection {
            badge: Some(Badge::Gold),
            ..FilterSelection::all()
        };
        let outcome = apply_filters(&roster, &selection, &BadgeThresholds::default());
        assert_eq!(outcome.rows.len(), 2); // points 15 and 20
    }

    #[test]
    fn predicates_and_compose() {
        let roster = sample_roster();
        let selection = FilterSelection {
            departments: vec![Department::Hr],
            points_min: 0,
            points_max: 20,
            badge: Some(Badge::Silver),
        };
        let outcome = apply_filters(&roster, &selection, &BadgeThresholds::default());
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].id, "a2");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let roster = sample_roster();
        let selection = FilterSelection {
            departments: vec![Department::Legal],
            ..FilterSelection::all()
        };
        let outcome = apply_filters(&roster, &selection, &BadgeThresholds::default());
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.metrics.employee_count, 0);
        assert_eq!(outcome.metrics.completion_rate, 0.0);
        assert_eq!(outcome.metrics.total_points, 0);
        assert_eq!(outcome.metrics.gold_count, 0);
    }

    #[test]
    fn result_is_subset_satisfying_all_predicates() {
        let roster = sample_roster();
        let thresholds = BadgeThresholds::default();
        let selection = FilterSelection {
            departments: vec![Department::Hr, Department::Sales],
            points_min: 1,
            points_max: 16,
            badge: None,
        };
        let outcome = apply_filters(&roster, &selection, &thresholds);
        for row in &outcome.rows {
            assert!(roster.contains(row));
            assert!(selection.matches(row, &thresholds));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let roster = sample_roster();
        let thresholds = BadgeThresholds::default();
        let selection = FilterSelection {
            departments: vec![Department::Hr],
            points_min: 1,
            points_max: 20,
            badge: None,
        };
        let once = apply_filters(&roster, &selection, &thresholds);
        let twice = apply_filters(&once.rows, &selection, &thresholds);
        assert_eq!(once.rows, twice.rows);
        assert_eq!(once.metrics, twice.metrics);
    }

    #[test]
    fn predicate_order_does_not_matter() {
        // Apply the three predicates one axis at a time, in two different
        // orders; the surviving set must be identical.
        let roster = sample_roster();
        let thresholds = BadgeThresholds::default();

        let dept_only = FilterSelection {
            departments: vec![Department::Hr, Department::Tech],
            ..FilterSelection::all()
        };
        let points_only = FilterSelection {
            points_min: 5,
            points_max: 20,
            ..FilterSelection::all()
        };
        let badge_only = FilterSelection {
            badge: Some(Badge::Silver),
            ..FilterSelection::all()
        };

        let forward = apply_filters(
            &apply_filters(
                &apply_filters(&roster, &dept_only, &thresholds).rows,
                &points_only,
                &thresholds,
            )
            .rows,
            &badge_only,
            &thresholds,
        );
        let backward = apply_filters(
            &apply_filters(
                &apply_filters(&roster, &badge_only, &thresholds).rows,
                &points_only,
                &thresholds,
            )
            .rows,
            &dept_only,
            &thresholds,
        );
        assert_eq!(forward.rows, backward.rows);
    }

    #[test]
    fn input_roster_is_untouched() {
        let roster = sample_roster();
        let before = roster.clone();
        let selection = FilterSelection {
            departments: vec![Department::Finance],
            ..FilterSelection::all()
        };
        let _ = apply_filters(&roster, &selection, &BadgeThresholds::default());
        assert_eq!(roster, before);
    }
}
