//! Summary metrics over a filtered roster slice.
//!
//! Metrics are derived, read-only values recomputed on every filter change —
//! never cached, never mutated in place. Averages over an empty slice are
//! defined as `0.0` so an empty filter result is an ordinary outcome, not a
//! division-by-zero hazard.

use serde::{Deserialize, Serialize};

use crate::badge::{classify, Badge, BadgeThresholds};
use crate::roster::Employee;

/// Aggregate dashboard metrics for one filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Rows in the filtered view.
    pub employee_count: usize,
    /// Share of rows with the compliance task done, as a percentage rounded
    /// to one decimal place. `0.0` when the view is empty.
    pub completion_rate: f64,
    /// Rows whose deadline has passed (`due_in_days < 0`).
    pub overdue_count: usize,
    /// Mean of the per-employee completion percentage over rows that carry
    /// it (alternate roster schema). `0.0` when none do.
    pub average_completion_pct: f64,
    /// Sum of points over the view.
    pub total_points: u64,
    /// Rows classifying as Gold under the active thresholds.
    pub gold_count: usize,
}

impl DashboardMetrics {
    /// Metrics for an empty view; all counts and rates are zero.
    pub fn empty() -> Self {
        Self {
            employee_count: 0,
            completion_rate: 0.0,
            overdue_count: 0,
            average_completion_pct: 0.0,
            total_points: 0,
            gold_count: 0,
        }
    }
}

/// Round a ratio to one decimal place of percent.
fn round_pct(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute metrics over an already-filtered slice of the roster.
pub fn compute_metrics(rows: &[Employee], thresholds: &BadgeThresholds) -> DashboardMetrics {
    if rows.is_empty() {
        return DashboardMetrics::empty();
    }

    let completed = rows.iter().filter(|e| e.completed).count();
    let completion_rate = round_pct(completed as f64 / rows.len() as f64 * 100.0);

    let with_pct: Vec<f64> = rows
        .iter()
        .filter_map(|e| e.completion_pct.map(f64::from))
        .collect();
    let average_completion_pct = if with_pct.is_empty() {
        0.0
    } else {
        round_pct(with_pct.iter().sum::<f64>() / with_pct.len() as f64)
    };

    DashboardMetrics {
        employee_count: rows.len(),
        completion_rate,
        overdue_count: rows.iter().filter(|e| e.is_overdue()).count(),
        average_completion_pct,
        total_points: rows.iter().map(|e| u64::from(e.points)).sum(),
        gold_count: rows
            .iter()
            .filter(|e| classify(e.points, thresholds) == Badge::Gold)
            .count(),
    }
}
