//! Pure dashboard logic for Nudgeboard.
//!
//! This crate contains all roster/dashboard rules that are independent of any
//! UI, runtime, or data source. Functions take plain data and return results,
//! making them unit-testable and portable across the headless harness, a CLI,
//! or any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`badge`] | Badge tiers and threshold classification (two preset scales) |
//! | [`dashboard_config`] | Roster generation parameters and validation |
//! | [`filter`] | Filter selection and the filter/aggregate pipeline |
//! | [`metrics`] | Summary metrics over a filtered roster slice |
//! | [`nudge`] | Simulated nudge message composition and receipts |
//! | [`responder`] | Scripted keyword-match chat responder |
//! | [`roster`] | Departments and the employee record |

pub mod badge;
pub mod dashboard_config;
pub mod filter;
pub mod metrics;
pub mod nudge;
pub mod responder;
pub mod roster;
