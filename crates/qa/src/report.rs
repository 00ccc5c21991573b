//! Checkpoint result and report types.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

/// Valid checkpoint categories (mirrored by the report consumers).
pub const CATEGORY_ARCHITECTURE: &str = "architecture";
pub const CATEGORY_PERFORMANCE: &str = "performance";
pub const CATEGORY_QUALITY: &str = "quality";
pub const CATEGORY_SECURITY: &str = "security";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Outcome of a single checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Warning => "warning",
            Self::Failed => "failed",
        }
    }
}

/// How urgent a non-passing result is for the project team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Status and message produced by a checkpoint function.
///
/// The identifying metadata (id, name, category, priority) lives on the
/// registry entry, so even a checkpoint that errors out still yields a
/// fully identified [`CheckResult`].
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckOutcome {
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Passed,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Failed,
            message: message.into(),
        }
    }
}

/// One fully identified checkpoint result. Immutable once produced;
/// consumers key off `id`, which is stable across runs.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub priority: Priority,
    pub status: CheckStatus,
    pub message: String,
}

/// Aggregate counts over a report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub warnings: usize,
    pub failures: usize,
}

/// The ordered collection of all checkpoint results from one run.
///
/// `results.len()` always equals the registry size, regardless of how many
/// individual checkpoints degraded.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub project_path: String,
    pub results: Vec<CheckResult>,
    pub summary: ReportSummary,
}

impl Report {
    pub fn new(project_path: String, results: Vec<CheckResult>) -> Self {
        let summary = ReportSummary {
            total: results.len(),
            passed: count(&results, CheckStatus::Passed),
            warnings: count(&results, CheckStatus::Warning),
            failures: count(&results, CheckStatus::Failed),
        };
        Self {
            project_path,
            results,
            summary,
        }
    }

    /// Whether any checkpoint failed (drives the CLI exit code).
    pub fn has_failures(&self) -> bool {
        self.summary.failures > 0
    }
}

fn count(results: &[CheckResult], status: CheckStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}
