//! Conformance fixture tooling for strio.
//!
//! This crate provides:
//! - Fixture management: JSON fixture sets naming a scenario, its inputs,
//!   and the expected observation
//! - Scenario execution: drive one library entry point in-process over
//!   in-memory streams, observing exit status and captured stdout — the
//!   same two channels the original out-of-process driver inspected
//! - Report generation: human-readable + machine-readable conformance
//!   reports with stdout digests

#![forbid(unsafe_code)]

pub mod fixtures;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod verify;

pub use fixtures::{Expectation, FixtureCase, FixtureSet, builtin_suite};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use scenario::{Observation, ScenarioError, execute_scenario};
pub use verify::{VerificationResult, VerificationSummary};
