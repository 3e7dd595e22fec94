//! Fixture execution engine.

use crate::fixtures::{Expectation, FixtureSet};
use crate::scenario::{Observation, execute_scenario};
use crate::verify::{VerificationResult, sha256_hex};

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let outcome =
                    execute_scenario(&case.scenario, &case.args, case.stdin.as_bytes());
                let (passed, actual, digest) = match &outcome {
                    Ok(obs) => (
                        matches(&case.expect, obs),
                        render_observation(obs),
                        sha256_hex(&obs.stdout),
                    ),
                    Err(err) => (false, format!("error: {err}"), sha256_hex(b"")),
                };
                VerificationResult {
                    case_name: case.name.clone(),
                    scenario: case.scenario.clone(),
                    family: fixture_set.family.clone(),
                    passed,
                    expected: render_expectation(&case.expect),
                    actual,
                    stdout_sha256: digest,
                }
            })
            .collect()
    }
}

fn matches(expect: &Expectation, obs: &Observation) -> bool {
    if let Some(code) = expect.exit_code
        && code != obs.exit_code
    {
        return false;
    }
    if let Some(stdout) = &expect.stdout
        && stdout.as_bytes() != obs.stdout.as_slice()
    {
        return false;
    }
    true
}

fn render_observation(obs: &Observation) -> String {
    format!(
        "exit={} stdout={:?}",
        obs.exit_code,
        String::from_utf8_lossy(&obs.stdout)
    )
}

fn render_expectation(expect: &Expectation) -> String {
    let exit = expect
        .exit_code
        .map_or_else(|| "any".to_string(), |c| c.to_string());
    let stdout = expect
        .stdout
        .as_deref()
        .map_or_else(|| "any".to_string(), |s| format!("{s:?}"));
    format!("exit={exit} stdout={stdout}")
}
