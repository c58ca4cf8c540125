//! Nudgeboard Core - Session Engine
//!
//! Owns one dashboard session: an immutable synthetic roster generated from
//! a seed, the viewer's current filter selection, and a session-local log of
//! simulated nudges. All rules live in `nudgeboard-logic`; this crate wires
//! them to a roster and hands views to whatever front end asks.
//!
//! # Example
//!
//! ```rust
//! use nudgeboard_core::prelude::*;
//!
//! let engine = DashboardEngine::new(&RosterConfig::default()).unwrap();
//! let view = engine.view();
//! assert_eq!(view.metrics.employee_count, 50);
//! ```

pub mod engine;
pub mod generation;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{DashboardEngine, DashboardRow, DashboardView};
    pub use crate::generation::generate_roster;
    pub use nudgeboard_logic::dashboard_config::RosterConfig;
    pub use nudgeboard_logic::filter::FilterSelection;
}
