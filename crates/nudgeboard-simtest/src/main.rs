//! Nudgeboard Headless Validation Harness
//!
//! Exercises the dashboard logic end to end without any UI.
//! Runs entirely in-process — no rendering, no networking, no state on disk.
//!
//! Usage:
//!   cargo run -p nudgeboard-simtest
//!   cargo run -p nudgeboard-simtest -- --verbose

use nudgeboard_core::engine::{DashboardEngine, DashboardView};
use nudgeboard_core::generation::generate_roster;
use nudgeboard_logic::badge::{classify, Badge, BadgeThresholds};
use nudgeboard_logic::dashboard_config::{validate_config, RosterConfig};
use nudgeboard_logic::filter::{apply_filters, FilterSelection};
use nudgeboard_logic::responder::{respond, ReplyKind};
use nudgeboard_logic::roster::Department;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Nudgeboard Dashboard Harness ===\n");

    let mut results = Vec::new();

    // 1. Roster generation
    results.extend(validate_generation());

    // 2. Badge classification sweep (both scales)
    results.extend(validate_badges());

    // 3. Filter pipeline sweep
    results.extend(validate_filters());

    // 4. Metrics zero-guards
    results.extend(validate_metrics());

    // 5. Scripted responder
    results.extend(validate_responder());

    // 6. Full session: nudges + JSON view
    results.extend(validate_session());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Roster generation ────────────────────────────────────────────────

fn validate_generation() -> Vec<TestResult> {
    println!("--- Roster Generation ---");
    let mut results = Vec::new();

    let config = RosterConfig::default();
    results.push(check(
        "config_valid",
        validate_config(&config).is_empty(),
        "default config passes validation".into(),
    ));

    let roster = generate_roster(&config);
    results.push(check(
        "roster_size",
        roster.len() as u64 == config.total_rows(),
        format!("{} rows generated", roster.len()),
    ));

    let rerun = generate_roster(&config);
    results.push(check(
        "deterministic",
        roster == rerun,
        "same seed reproduces the roster".into(),
    ));

    let unique_ids = roster
        .iter()
        .map(|e| e.id.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();
    results.push(check(
        "unique_ids",
        unique_ids == roster.len(),
        format!("{unique_ids} unique ids"),
    ));

    let in_range = roster
        .iter()
        .all(|e| e.points <= config.points_max && e.due_in_days >= config.due_min);
    results.push(check(
        "fields_in_range",
        in_range,
        "points and deadlines within configured ranges".into(),
    ));

    let full_config = RosterConfig {
        departments: Department::ALL.to_vec(),
        ..RosterConfig::default()
    };
    let full_roster = generate_roster(&full_config);
    results.push(check(
        "all_departments",
        Department::ALL
            .iter()
            .all(|d| full_roster.iter().any(|e| e.department == *d)),
        format!("all {} departments populated", Department::ALL.len()),
    ));

    results
}

// ── 2. Badge classification ─────────────────────────────────────────────

fn validate_badges() -> Vec<TestResult> {
    println!("--- Badge Classification ---");
    let mut results = Vec::new();

    let narrow = BadgeThresholds::default();
    let narrow_cases = [
        (0, Badge::None),
        (1, Badge::Bronze),
        (7, Badge::Bronze),
        (8, Badge::Silver),
        (14, Badge::Silver),
        (15, Badge::Gold),
        (20, Badge::Gold),
    ];
    let narrow_ok = narrow_cases
        .iter()
        .all(|&(p, b)| classify(p, &narrow) == b);
    results.push(check(
        "narrow_scale",
        narrow_ok,
        "0-20 scale boundaries land on the higher tier".into(),
    ));

    let wide = BadgeThresholds::wide();
    let wide_cases = [
        (0, Badge::Bronze),
        (79, Badge::Bronze),
        (80, Badge::Silver),
        (149, Badge::Silver),
        (150, Badge::Gold),
        (160, Badge::Gold),
    ];
    let wide_ok = wide_cases.iter().all(|&(p, b)| classify(p, &wide) == b);
    results.push(check(
        "wide_scale",
        wide_ok,
        "0-200 scale has a Bronze floor and no None tier".into(),
    ));

    let mut monotonic = true;
    let mut last = 0;
    for points in 0..=200 {
        let rank = classify(points, &wide).rank();
        if rank < last {
            monotonic = false;
            break;
        }
        last = rank;
    }
    results.push(check(
        "monotonic",
        monotonic,
        "tier never drops as points increase".into(),
    ));

    results
}

// ── 3. Filter pipeline ──────────────────────────────────────────────────

fn validate_filters() -> Vec<TestResult> {
    println!("--- Filter Pipeline ---");
    let mut results = Vec::new();

    let roster = generate_roster(&RosterConfig::default());
    let thresholds = BadgeThresholds::default();

    let selection = FilterSelection {
        departments: vec![Department::Hr, Department::Tech],
        points_min: 5,
        points_max: 18,
        badge: None,
    };
    let outcome = apply_filters(&roster, &selection, &thresholds);
    let all_match = outcome.rows.iter().all(|e| selection.matches(e, &thresholds));
    results.push(check(
        "predicates_and_compose",
        all_match && outcome.rows.iter().all(|e| roster.contains(e)),
        format!("{} of {} rows survive, all satisfy every axis", outcome.rows.len(), roster.len()),
    ));

    let refiltered = apply_filters(&outcome.rows, &selection, &thresholds);
    results.push(check(
        "idempotent",
        refiltered.rows == outcome.rows && refiltered.metrics == outcome.metrics,
        "refiltering with the same selection is a no-op".into(),
    ));

    // Department-then-badge vs badge-then-department
    let dept_axis = FilterSelection {
        departments: vec![Department::Sales, Department::Legal],
        ..FilterSelection::all()
    };
    let badge_axis = FilterSelection {
        badge: Some(Badge::Silver),
        ..FilterSelection::all()
    };
    let ab = apply_filters(
        &apply_filters(&roster, &dept_axis, &thresholds).rows,
        &badge_axis,
        &thresholds,
    );
    let ba = apply_filters(
        &apply_filters(&roster, &badge_axis, &thresholds).rows,
        &dept_axis,
        &thresholds,
    );
    results.push(check(
        "order_independent",
        ab.rows == ba.rows,
        "axis application order never changes the result".into(),
    ));

    results
}

// ── 4. Metrics zero-guards ──────────────────────────────────────────────

fn validate_metrics() -> Vec<TestResult> {
    println!("--- Metrics ---");
    let mut results = Vec::new();

    let roster = generate_roster(&RosterConfig::default());
    let impossible = FilterSelection {
        points_min: 1_000,
        points_max: 2_000,
        ..FilterSelection::all()
    };
    let outcome = apply_filters(&roster, &impossible, &BadgeThresholds::default());
    let m = &outcome.metrics;
    results.push(check(
        "zero_guard",
        m.employee_count == 0
            && m.completion_rate == 0.0
            && m.total_points == 0
            && m.gold_count == 0,
        "empty view yields zeroed metrics, no division by zero".into(),
    ));

    let full = apply_filters(&roster, &FilterSelection::all(), &BadgeThresholds::default());
    let expected_points: u64 = roster.iter().map(|e| u64::from(e.points)).sum();
    results.push(check(
        "totals_match_roster",
        full.metrics.employee_count == roster.len()
            && full.metrics.total_points == expected_points,
        format!(
            "{} rows, {} total points",
            full.metrics.employee_count, full.metrics.total_points
        ),
    ));

    results
}

// ── 5. Scripted responder ───────────────────────────────────────────────

fn validate_responder() -> Vec<TestResult> {
    println!("--- Scripted Responder ---");
    let mut results = Vec::new();

    let coaching_ok = ["training", "COMPLIANCE deadline", "new policy"]
        .iter()
        .all(|q| respond(q).kind == ReplyKind::Coaching);
    let nudging_ok = ["send a nudge", "Alert me"]
        .iter()
        .all(|q| respond(q).kind == ReplyKind::Nudging);
    let fallback_ok = respond("what's for lunch").kind == ReplyKind::Fallback;

    results.push(check(
        "keyword_match",
        coaching_ok && nudging_ok,
        "case-insensitive substring match on both keyword groups".into(),
    ));
    results.push(check(
        "fallback",
        fallback_ok,
        "unknown queries get the generic fallback".into(),
    ));

    results
}

// ── 6. Full session ─────────────────────────────────────────────────────

fn validate_session() -> Vec<TestResult> {
    println!("--- Session Engine ---");
    let mut results = Vec::new();

    let mut engine = match DashboardEngine::new(&RosterConfig::default()) {
        Ok(engine) => engine,
        Err(problems) => {
            results.push(check(
                "engine_start",
                false,
                format!("config rejected: {}", problems.join("; ")),
            ));
            return results;
        }
    };

    engine.set_selection(FilterSelection {
        departments: vec![Department::Hr],
        ..FilterSelection::all()
    });
    let view = engine.view();
    results.push(check(
        "hr_view",
        view.rows.iter().all(|r| r.department == "HR"),
        format!("{} HR rows in view", view.rows.len()),
    ));

    let nudged = view
        .rows
        .first()
        .and_then(|row| engine.send_nudge(&row.id));
    results.push(check(
        "nudge_simulated",
        nudged.as_ref().is_some_and(|r| !r.delivered) && engine.nudge_log().len() == 1,
        "receipt logged, nothing delivered".into(),
    ));

    results.push(check(
        "nudge_unknown_id",
        engine.send_nudge("ffffffff-nope").is_none(),
        "unknown employee id yields no receipt".into(),
    ));

    let gold_in_view = engine.gold_ids().len();
    results.push(check(
        "gold_count_consistent",
        gold_in_view == engine.view().metrics.gold_count,
        format!("{gold_in_view} gold badges in view"),
    ));

    // Round the view through JSON to prove the wire-friendly shape.
    let json_ok = serde_json::to_string(&view)
        .ok()
        .and_then(|s| serde_json::from_str::<DashboardView>(&s).ok())
        .map(|back| back == view)
        .unwrap_or(false);
    results.push(check(
        "view_serializes",
        json_ok,
        "DashboardView survives a JSON round trip".into(),
    ));

    results
}
