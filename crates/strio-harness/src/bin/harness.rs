//! CLI entrypoint for the strio conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use strio_harness::{ConformanceReport, FixtureSet, TestRunner, builtin_suite};

/// Conformance tooling for strio.
#[derive(Debug, Parser)]
#[command(name = "strio-harness")]
#[command(about = "Conformance fixture harness for strio")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the built-in fixture cases.
    List,
    /// Write the built-in fixture sets as JSON files.
    EmitFixtures {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the library against fixtures.
    Verify {
        /// Directory containing fixture JSON files; the built-in suite runs
        /// when omitted.
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for set in builtin_suite() {
                for case in &set.cases {
                    println!("{}/{} ({})", set.family, case.name, case.scenario);
                }
            }
        }
        Command::EmitFixtures { output } => {
            std::fs::create_dir_all(&output)?;
            for set in builtin_suite() {
                let path = output.join(format!("{}.{}.json", set.family, set.version));
                std::fs::write(&path, set.to_json()?)?;
                eprintln!("Wrote {}", path.display());
            }
        }
        Command::Verify {
            fixture,
            report,
            timestamp,
        } => {
            let fixture_sets = match fixture {
                Some(dir) => load_fixture_dir(&dir)?,
                None => builtin_suite(),
            };

            let runner = TestRunner::new("fixture-verify");
            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(runner.run(set));
            }

            // Stabilize report ordering for reproducible golden-output hashing.
            results.sort_by(|a, b| {
                a.family
                    .cmp(&b.family)
                    .then_with(|| a.scenario.cmp(&b.scenario))
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let summary = strio_harness::VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("strio Conformance Report"),
                timestamp: timestamp
                    .unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now())),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for r in report_doc.summary.results.iter().filter(|r| !r.passed) {
                eprintln!(
                    "FAIL {}/{}: expected {}, got {}",
                    r.family, r.case_name, r.expected, r.actual
                );
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
    }

    Ok(())
}

fn load_fixture_dir(dir: &PathBuf) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    fixture_paths.sort();

    let mut sets = Vec::new();
    for path in fixture_paths {
        match FixtureSet::from_file(&path) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
        }
    }
    if sets.is_empty() {
        return Err(format!("No fixture JSON files found in {}", dir.display()).into());
    }
    Ok(sets)
}
