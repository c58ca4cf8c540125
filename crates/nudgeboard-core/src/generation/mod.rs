//! Generation - seeded creation of synthetic rosters.
//!
//! The roster is generated once per session from an explicit seed, so the
//! same [`RosterConfig`] always produces the same rows. The caller owns the
//! seed; there is no process-wide random state.

mod names;

pub use names::generate_name;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use nudgeboard_logic::dashboard_config::RosterConfig;
use nudgeboard_logic::roster::Employee;

/// Draw an 8-hex-char id that hasn't been handed out yet this session.
fn fresh_id(rng: &mut impl Rng, used: &mut HashSet<String>) -> String {
    loop {
        let id = format!("{:08x}", rng.gen::<u32>());
        if used.insert(id.clone()) {
            return id;
        }
    }
}

/// Generate a well-formed roster from a config.
///
/// Deterministic: the same config (seed included) yields byte-identical
/// rows. Callers should run
/// [`validate_config`](nudgeboard_logic::dashboard_config::validate_config)
/// first; an invalid config here simply yields a degenerate roster (e.g.
/// empty for an empty department list), never a panic.
pub fn generate_roster(config: &RosterConfig) -> Vec<Employee> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut used_ids = HashSet::new();
    let mut roster = Vec::with_capacity(config.total_rows() as usize);

    for &department in &config.departments {
        for _ in 0..config.employees_per_department {
            let id = fresh_id(&mut rng, &mut used_ids);
            let name = generate_name(&mut rng);
            let completed = rng.gen_bool(0.5);
            let points = rng.gen_range(0..=config.points_max);
            let due_in_days = rng.gen_range(config.due_min..=config.due_max.max(config.due_min));
            let completion_pct = config
                .with_completion_pct
                .then(|| rng.gen_range(0.0_f32..=100.0));

            roster.push(Employee {
                id,
                name,
                department,
                completed,
                points,
                due_in_days,
                completion_pct,
            });
        }
    }

    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudgeboard_logic::roster::Department;

    #[test]
    fn same_seed_same_roster() {
        let config = RosterConfig::default();
        assert_eq!(generate_roster(&config), generate_roster(&config));
    }

    #[test]
    fn different_seed_different_roster() {
        let a = RosterConfig::default();
        let b = RosterConfig {
            seed: 43,
            ..RosterConfig::default()
        };
        assert_ne!(generate_roster(&a), generate_roster(&b));
    }

    #[test]
    fn roster_shape_follows_config() {
        let config = RosterConfig {
            departments: vec![Department::Hr, Department::It],
            employees_per_department: 4,
            ..RosterConfig::default()
        };
        let roster = generate_roster(&config);
        assert_eq!(roster.len(), 8);
        assert_eq!(
            roster
                .iter()
                .filter(|e| e.department == Department::It)
                .count(),
            4
        );
    }

    #[test]
    fn rows_are_well_formed() {
        let config = RosterConfig::default();
        for emp in generate_roster(&config) {
            assert_eq!(emp.id.len(), 8);
            assert!(emp.points <= config.points_max);
            assert!(emp.due_in_days >= config.due_min && emp.due_in_days <= config.due_max);
            assert!(!emp.name.is_empty());
            assert!(emp.completion_pct.is_none());
        }
    }

    #[test]
    fn ids_are_unique() {
        let config = RosterConfig {
            employees_per_department: 200,
            ..RosterConfig::default()
        };
        let roster = generate_roster(&config);
        let ids: HashSet<&str> = roster.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn completion_pct_populated_when_requested() {
        let config = RosterConfig {
            with_completion_pct: true,
            ..RosterConfig::default()
        };
        for emp in generate_roster(&config) {
            let pct = emp.completion_pct.unwrap();
            assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn empty_department_list_yields_empty_roster() {
        let config = RosterConfig {
            departments: Vec::new(),
            ..RosterConfig::default()
        };
        assert!(generate_roster(&config).is_empty());
    }
}
