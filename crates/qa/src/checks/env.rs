//! Environment configuration checkpoints.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::QaError;
use crate::report::CheckOutcome;

static DATABASE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*DATABASE_URL\s*=").expect("valid regex"));

/// Database connection configuration must be present.
///
/// Fallback chain: a `.env` declaring `DATABASE_URL` passes; a `.env`
/// without it, or only a `.env.example` template, warns; neither file is
/// a failure.
pub fn database_url_configured(project: &Path) -> Result<CheckOutcome, QaError> {
    let env_file = project.join(".env");
    if env_file.is_file() {
        let contents = fs::read_to_string(&env_file).map_err(|e| QaError::io(env_file, e))?;
        return Ok(if DATABASE_URL_RE.is_match(&contents) {
            CheckOutcome::passed("DATABASE_URL configured in .env")
        } else {
            CheckOutcome::warning(".env exists but does not set DATABASE_URL")
        });
    }

    if project.join(".env.example").is_file() {
        return Ok(CheckOutcome::warning(
            "no .env found; copy .env.example and set DATABASE_URL",
        ));
    }

    Ok(CheckOutcome::failed(
        "neither .env nor .env.example found; DATABASE_URL is unconfigured",
    ))
}
