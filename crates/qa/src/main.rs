//! `govnav-qa` -- project QA checkpoint runner.
//!
//! Audits a project directory against the registered checkpoint catalog
//! and prints the report.
//!
//! # Usage
//!
//! ```text
//! govnav-qa <project-path> [--json]
//! ```
//!
//! Exits non-zero if any checkpoint failed; warnings do not affect the
//! exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use govnav_qa::{validate, Report};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "govnav_qa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut json_output = false;
    let mut project_path: Option<PathBuf> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            other if project_path.is_none() => project_path = Some(PathBuf::from(other)),
            other => {
                tracing::error!(argument = other, "unexpected argument");
                eprintln!("usage: govnav-qa <project-path> [--json]");
                return ExitCode::from(2);
            }
        }
    }

    let Some(project_path) = project_path else {
        eprintln!("usage: govnav-qa <project-path> [--json]");
        return ExitCode::from(2);
    };

    let report = validate(&project_path);

    if json_output {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize report");
                return ExitCode::from(2);
            }
        }
    } else {
        print_report(&report);
    }

    if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_report(report: &Report) {
    println!("QA report for {}", report.project_path);
    println!();
    for result in &report.results {
        println!(
            "  [{:>7}] {:<24} {:<12} {:<8} {}",
            result.status.as_str(),
            result.id,
            result.category,
            result.priority.as_str(),
            result.message,
        );
    }
    println!();
    println!(
        "{} checks: {} passed, {} warnings, {} failures",
        report.summary.total,
        report.summary.passed,
        report.summary.warnings,
        report.summary.failures,
    );
}
