//! Dashboard engine - main entry point for one viewer session.
//!
//! The engine owns the immutable roster plus the viewer's mutable filter
//! selection, and recomputes the visible view on demand. One engine = one
//! session; nothing is shared across sessions.

use serde::{Deserialize, Serialize};

use nudgeboard_logic::badge::{classify, Badge, BadgeThresholds};
use nudgeboard_logic::dashboard_config::{validate_config, RosterConfig};
use nudgeboard_logic::filter::{apply_filters, FilterSelection};
use nudgeboard_logic::metrics::DashboardMetrics;
use nudgeboard_logic::nudge::{compose_nudge, NudgeReceipt};
use nudgeboard_logic::responder::{respond, BotReply};
use nudgeboard_logic::roster::Employee;

use crate::generation::generate_roster;

/// One leaderboard row as the front end renders it: an employee plus the
/// badge derived for the session's active thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub id: String,
    pub name: String,
    pub department: String,
    pub completed: bool,
    pub points: u32,
    pub due_in_days: i32,
    /// Dashboard label; empty string for no badge.
    pub badge: String,
}

impl DashboardRow {
    fn from_employee(employee: &Employee, thresholds: &BadgeThresholds) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department.to_string(),
            completed: employee.completed,
            points: employee.points,
            due_in_days: employee.due_in_days,
            badge: classify(employee.points, thresholds).to_string(),
        }
    }
}

/// What the front end renders after a filter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub rows: Vec<DashboardRow>,
    pub metrics: DashboardMetrics,
}

/// One dashboard session.
#[derive(Debug)]
pub struct DashboardEngine {
    /// Immutable after generation.
    roster: Vec<Employee>,
    selection: FilterSelection,
    thresholds: BadgeThresholds,
    nudge_log: Vec<NudgeReceipt>,
}

impl DashboardEngine {
    /// Generate a session roster and start with the "All" selection.
    ///
    /// Returns the config validation problems instead of an engine when the
    /// config is unusable.
    pub fn new(config: &RosterConfig) -> Result<Self, Vec<String>> {
        let problems = validate_config(config);
        if !problems.is_empty() {
            return Err(problems);
        }
        Ok(Self {
            roster: generate_roster(config),
            selection: FilterSelection::all(),
            thresholds: BadgeThresholds::default(),
            nudge_log: Vec::new(),
        })
    }

    /// Switch the badge scale for this session (e.g. to the wide 0–200
    /// presets). Badges are derived, so no roster rewrite is needed.
    pub fn set_thresholds(&mut self, thresholds: BadgeThresholds) {
        self.thresholds = thresholds;
    }

    /// Replace the viewer's filter selection.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The full generated roster, unfiltered.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Recompute the visible view for the current selection.
    ///
    /// Pure with respect to session state: calling this twice in a row
    /// returns identical views.
    pub fn view(&self) -> DashboardView {
        let outcome = apply_filters(&self.roster, &self.selection, &self.thresholds);
        DashboardView {
            rows: outcome
                .rows
                .iter()
                .map(|e| DashboardRow::from_employee(e, &self.thresholds))
                .collect(),
            metrics: outcome.metrics,
        }
    }

    /// Simulate sending a nudge to an employee in the current view.
    ///
    /// Returns `None` for ids that don't exist or are filtered out of view;
    /// otherwise logs and returns the receipt. Nothing is ever delivered.
    pub fn send_nudge(&mut self, employee_id: &str) -> Option<NudgeReceipt> {
        let employee = self
            .roster
            .iter()
            .find(|e| e.id == employee_id && self.selection.matches(e, &self.thresholds))?;
        let receipt = compose_nudge(employee);
        self.nudge_log.push(receipt.clone());
        Some(receipt)
    }

    /// Ask the scripted bot a question.
    pub fn ask(&self, query: &str) -> BotReply {
        respond(query)
    }

    /// All nudges simulated this session, oldest first.
    pub fn nudge_log(&self) -> &[NudgeReceipt] {
        &self.nudge_log
    }

    /// Convenience for tests and the harness: gold-badge ids in view.
    pub fn gold_ids(&self) -> Vec<String> {
        self.view()
            .rows
            .iter()
            .filter(|r| r.badge == Badge::Gold.to_string())
            .map(|r| r.id.clone())
            .collect()
    }
}
