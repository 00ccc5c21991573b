//! Checkpoints over the Prisma schema and its sibling artifacts.
//!
//! The schema is opaque text: every rule here is a case-insensitive regex
//! over the raw file, matching the conventions the project mandates --
//! datasource provider, client generator, required models, relations,
//! indexes, soft-delete and timestamp columns.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::QaError;
use crate::report::CheckOutcome;

/// Models every project schema must define.
pub const REQUIRED_MODELS: &[&str] = &["AISystem", "User", "PolicyPack"];

static PROVIDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)provider\s*=\s*"postgresql""#).expect("valid regex"));
static GENERATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)generator\s+client\s*\{").expect("valid regex"));
static RELATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@relation").expect("valid regex"));
static INDEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@@index|@@unique|@unique").expect("valid regex"));
static SOFT_DELETE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)deletedAt\s+DateTime\?").expect("valid regex"));
static DEFAULT_NOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@default\(now\(\)\)").expect("valid regex"));
static UPDATED_AT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@updatedAt").expect("valid regex"));

/// One `model <Name> {` matcher per required model.
static MODEL_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    REQUIRED_MODELS
        .iter()
        .map(|model| {
            let pattern = format!(r"(?i)model\s+{model}\s*\{{");
            (*model, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

fn schema_path(project: &Path) -> PathBuf {
    project.join("prisma").join("schema.prisma")
}

/// Read the schema, distinguishing "absent" (a reportable condition) from
/// an unexpected read failure.
fn read_schema(project: &Path) -> Result<Option<String>, QaError> {
    let path = schema_path(project);
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(&path)
        .map(Some)
        .map_err(|e| QaError::io(path, e))
}

fn missing_schema(what: &str) -> CheckOutcome {
    CheckOutcome::failed(format!("prisma/schema.prisma not found; cannot check {what}"))
}

// ---------------------------------------------------------------------------
// Checkpoint functions
// ---------------------------------------------------------------------------

/// `prisma/schema.prisma` must exist.
pub fn schema_exists(project: &Path) -> Result<CheckOutcome, QaError> {
    if schema_path(project).is_file() {
        Ok(CheckOutcome::passed("prisma/schema.prisma is present"))
    } else {
        Ok(CheckOutcome::failed("prisma/schema.prisma not found"))
    }
}

/// The schema must declare a postgresql datasource and a client generator.
pub fn schema_valid(project: &Path) -> Result<CheckOutcome, QaError> {
    let Some(schema) = read_schema(project)? else {
        return Ok(missing_schema("datasource and generator declarations"));
    };

    let has_provider = PROVIDER_RE.is_match(&schema);
    let has_generator = GENERATOR_RE.is_match(&schema);

    Ok(match (has_provider, has_generator) {
        (true, true) => {
            CheckOutcome::passed("postgresql datasource and client generator declared")
        }
        (false, true) => CheckOutcome::failed("no postgresql provider declaration found"),
        (true, false) => CheckOutcome::failed("no client generator block found"),
        (false, false) => {
            CheckOutcome::failed("neither provider declaration nor generator block found")
        }
    })
}

/// All required models must be defined; partial coverage names the gaps.
pub fn models_defined(project: &Path) -> Result<CheckOutcome, QaError> {
    let Some(schema) = read_schema(project)? else {
        return Ok(missing_schema("required model definitions"));
    };

    let missing: Vec<&str> = MODEL_RES
        .iter()
        .filter(|(_, re)| !re.is_match(&schema))
        .map(|(model, _)| *model)
        .collect();

    Ok(if missing.is_empty() {
        CheckOutcome::passed(format!(
            "all required models defined: {}",
            REQUIRED_MODELS.join(", ")
        ))
    } else if missing.len() == REQUIRED_MODELS.len() {
        CheckOutcome::failed(format!(
            "none of the required models are defined: {}",
            REQUIRED_MODELS.join(", ")
        ))
    } else {
        CheckOutcome::warning(format!("missing model definitions: {}", missing.join(", ")))
    })
}

/// Relation annotations signal the schema models its foreign keys.
pub fn relations_defined(project: &Path) -> Result<CheckOutcome, QaError> {
    boolean_presence(
        project,
        &RELATION_RE,
        "relation markers",
        "@relation annotations present",
        "no @relation annotations found; model links may be implicit",
    )
}

/// Index or uniqueness annotations must appear somewhere in the schema.
pub fn indexes_defined(project: &Path) -> Result<CheckOutcome, QaError> {
    boolean_presence(
        project,
        &INDEX_RE,
        "index annotations",
        "index/uniqueness annotations present",
        "no @@index, @@unique, or @unique annotations found",
    )
}

/// Soft-delete convention: a nullable `deletedAt DateTime?` column.
pub fn soft_delete_convention(project: &Path) -> Result<CheckOutcome, QaError> {
    boolean_presence(
        project,
        &SOFT_DELETE_RE,
        "soft-delete columns",
        "soft-delete columns (deletedAt DateTime?) present",
        "no deletedAt DateTime? columns found; deletes will be destructive",
    )
}

/// Timestamp conventions: `@default(now())` and `@updatedAt` both in use.
pub fn timestamp_conventions(project: &Path) -> Result<CheckOutcome, QaError> {
    let Some(schema) = read_schema(project)? else {
        return Ok(missing_schema("timestamp conventions"));
    };

    let has_default_now = DEFAULT_NOW_RE.is_match(&schema);
    let has_updated_at = UPDATED_AT_RE.is_match(&schema);

    Ok(match (has_default_now, has_updated_at) {
        (true, true) => CheckOutcome::passed("@default(now()) and @updatedAt both in use"),
        (true, false) => CheckOutcome::warning("@updatedAt not used; update times untracked"),
        (false, true) => CheckOutcome::warning("@default(now()) not used; creation times untracked"),
        (false, false) => CheckOutcome::warning("no timestamp annotations found"),
    })
}

/// `prisma/migrations/` must exist and contain at least one migration.
pub fn migrations_exist(project: &Path) -> Result<CheckOutcome, QaError> {
    let dir = project.join("prisma").join("migrations");
    if !dir.is_dir() {
        return Ok(CheckOutcome::failed("prisma/migrations directory not found"));
    }

    let entries = fs::read_dir(&dir).map_err(|e| QaError::io(dir, e))?;
    let count = entries.filter_map(|e| e.ok()).count();

    Ok(if count == 0 {
        CheckOutcome::warning("prisma/migrations exists but contains no migrations")
    } else {
        CheckOutcome::passed(format!("{count} migration entries found"))
    })
}

/// A seed script should exist (`prisma/seed.ts` or `prisma/seed.js`).
pub fn seed_data_present(project: &Path) -> Result<CheckOutcome, QaError> {
    let prisma_dir = project.join("prisma");
    let seed = ["seed.ts", "seed.js"]
        .iter()
        .find(|name| prisma_dir.join(name).is_file());

    Ok(match seed {
        Some(name) => CheckOutcome::passed(format!("seed script present: prisma/{name}")),
        None => CheckOutcome::warning("no prisma/seed.ts or prisma/seed.js found"),
    })
}

fn boolean_presence(
    project: &Path,
    pattern: &Regex,
    what: &str,
    passed_msg: &str,
    warning_msg: &str,
) -> Result<CheckOutcome, QaError> {
    let Some(schema) = read_schema(project)? else {
        return Ok(missing_schema(what));
    };
    Ok(if pattern.is_match(&schema) {
        CheckOutcome::passed(passed_msg)
    } else {
        CheckOutcome::warning(warning_msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const FULL_SCHEMA: &str = r#"
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

generator client {
  provider = "prisma-client-js"
}

model AISystem {
  id        String    @id @default(uuid())
  name      String    @unique
  owner     User      @relation(fields: [ownerId], references: [id])
  ownerId   String
  createdAt DateTime  @default(now())
  updatedAt DateTime  @updatedAt
  deletedAt DateTime?

  @@index([ownerId])
}

model User {
  id      String     @id @default(uuid())
  email   String     @unique
  systems AISystem[]
}

model PolicyPack {
  id   String @id @default(uuid())
  name String
}
"#;

    fn project_with_schema(schema: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_schema(dir.path(), schema);
        dir
    }

    fn write_schema(project: &Path, schema: &str) {
        let prisma = project.join("prisma");
        fs::create_dir_all(&prisma).unwrap();
        fs::write(prisma.join("schema.prisma"), schema).unwrap();
    }

    #[test]
    fn test_schema_exists() {
        let dir = project_with_schema(FULL_SCHEMA);
        let outcome = schema_exists(dir.path()).unwrap();
        assert_eq!(outcome.status, CheckStatus::Passed);
    }

    #[test]
    fn test_schema_missing_fails() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = schema_exists(dir.path()).unwrap();
        assert_eq!(outcome.status, CheckStatus::Failed);
    }

    #[test]
    fn test_schema_valid_requires_both_declarations() {
        let dir = project_with_schema(FULL_SCHEMA);
        assert_eq!(
            schema_valid(dir.path()).unwrap().status,
            CheckStatus::Passed
        );

        write_schema(dir.path(), "generator client {\n  provider = \"prisma-client-js\"\n}");
        let outcome = schema_valid(dir.path()).unwrap();
        assert_eq!(outcome.status, CheckStatus::Failed);
        assert!(outcome.message.contains("provider"));

        write_schema(dir.path(), "datasource db {\n  provider = \"postgresql\"\n}");
        let outcome = schema_valid(dir.path()).unwrap();
        assert_eq!(outcome.status, CheckStatus::Failed);
        assert!(outcome.message.contains("generator"));
    }

    #[test]
    fn test_schema_valid_missing_schema_names_prerequisite() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = schema_valid(dir.path()).unwrap();
        assert_eq!(outcome.status, CheckStatus::Failed);
        assert!(outcome.message.contains("schema.prisma"));
    }

    #[test]
    fn test_all_models_pass() {
        let dir = project_with_schema(FULL_SCHEMA);
        assert_eq!(
            models_defined(dir.path()).unwrap().status,
            CheckStatus::Passed
        );
    }

    #[test]
    fn test_partial_models_warn_and_name_the_missing_one() {
        let partial = "model AISystem {\n id String @id\n}\nmodel User {\n id String @id\n}";
        let dir = project_with_schema(partial);
        let outcome = models_defined(dir.path()).unwrap();
        assert_eq!(outcome.status, CheckStatus::Warning);
        assert!(outcome.message.contains("PolicyPack"));
        assert!(!outcome.message.contains("AISystem"));
        assert!(!outcome.message.contains("User,"));
    }

    #[test]
    fn test_no_models_fails() {
        let dir = project_with_schema("datasource db {}");
        assert_eq!(
            models_defined(dir.path()).unwrap().status,
            CheckStatus::Failed
        );
    }

    #[test]
    fn test_relations_and_indexes() {
        let dir = project_with_schema(FULL_SCHEMA);
        assert_eq!(
            relations_defined(dir.path()).unwrap().status,
            CheckStatus::Passed
        );
        assert_eq!(
            indexes_defined(dir.path()).unwrap().status,
            CheckStatus::Passed
        );

        let bare = project_with_schema("model AISystem {\n id String\n}");
        assert_eq!(
            relations_defined(bare.path()).unwrap().status,
            CheckStatus::Warning
        );
        assert_eq!(
            indexes_defined(bare.path()).unwrap().status,
            CheckStatus::Warning
        );
    }

    #[test]
    fn test_soft_delete_and_timestamps() {
        let dir = project_with_schema(FULL_SCHEMA);
        assert_eq!(
            soft_delete_convention(dir.path()).unwrap().status,
            CheckStatus::Passed
        );
        assert_eq!(
            timestamp_conventions(dir.path()).unwrap().status,
            CheckStatus::Passed
        );

        let partial = project_with_schema("model A {\n createdAt DateTime @default(now())\n}");
        let outcome = timestamp_conventions(partial.path()).unwrap();
        assert_eq!(outcome.status, CheckStatus::Warning);
        assert!(outcome.message.contains("@updatedAt"));
    }

    #[test]
    fn test_migrations_three_way() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            migrations_exist(dir.path()).unwrap().status,
            CheckStatus::Failed
        );

        let migrations = dir.path().join("prisma").join("migrations");
        fs::create_dir_all(&migrations).unwrap();
        assert_eq!(
            migrations_exist(dir.path()).unwrap().status,
            CheckStatus::Warning
        );

        fs::create_dir(migrations.join("20260101000000_init")).unwrap();
        assert_eq!(
            migrations_exist(dir.path()).unwrap().status,
            CheckStatus::Passed
        );
    }

    #[test]
    fn test_seed_script_detection() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("prisma")).unwrap();
        assert_eq!(
            seed_data_present(dir.path()).unwrap().status,
            CheckStatus::Warning
        );

        fs::write(dir.path().join("prisma").join("seed.ts"), "seed()").unwrap();
        assert_eq!(
            seed_data_present(dir.path()).unwrap().status,
            CheckStatus::Passed
        );
    }
}
