//! Source-tree and operational checkpoints.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::QaError;
use crate::report::CheckOutcome;
use crate::scanner::contains_pattern;

static RAW_QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$queryRaw|\$executeRaw").expect("valid regex"));

/// Raw SQL escape hatches anywhere under `src/`.
///
/// Polarity is inverted relative to the other checks: *absence* of the
/// pattern is the desired state.
pub fn raw_query_audit(project: &Path) -> Result<CheckOutcome, QaError> {
    let src = project.join("src");
    Ok(if contains_pattern(&src, &RAW_QUERY_RE) {
        CheckOutcome::warning(
            "raw query calls ($queryRaw/$executeRaw) found under src/; audit them for injection safety",
        )
    } else {
        CheckOutcome::passed("no raw query calls found under src/")
    })
}

/// Backup strategy has no automatable signal in the repository.
pub fn backup_strategy(_project: &Path) -> Result<CheckOutcome, QaError> {
    Ok(CheckOutcome::warning(
        "database backup strategy needs manual verification",
    ))
}
