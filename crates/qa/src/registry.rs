//! Checkpoint registry and validation runner.
//!
//! The checkpoint set is fixed and known at compile time, so the registry
//! is a plain static slice rather than a runtime map. Registration order
//! defines report order, and consumers key off the stable `id` strings.

use std::path::Path;

use crate::checks::{env, prisma, source};
use crate::error::QaError;
use crate::report::{
    CheckOutcome, CheckResult, Priority, Report, CATEGORY_ARCHITECTURE, CATEGORY_PERFORMANCE,
    CATEGORY_QUALITY, CATEGORY_SECURITY,
};

/// A checkpoint function: inspect the project, report an outcome.
pub type CheckFn = fn(&Path) -> Result<CheckOutcome, QaError>;

/// One registry entry. Identifying metadata lives here rather than in the
/// function so a checkpoint that errors out still yields a fully
/// identified result.
pub struct Checkpoint {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub priority: Priority,
    pub run: CheckFn,
}

/// The full checkpoint catalog, in report order.
pub const CHECKPOINTS: &[Checkpoint] = &[
    Checkpoint {
        id: "prisma-schema-exists",
        name: "Prisma schema present",
        category: CATEGORY_ARCHITECTURE,
        priority: Priority::Critical,
        run: prisma::schema_exists,
    },
    Checkpoint {
        id: "prisma-schema-valid",
        name: "Datasource and generator declared",
        category: CATEGORY_ARCHITECTURE,
        priority: Priority::Critical,
        run: prisma::schema_valid,
    },
    Checkpoint {
        id: "prisma-models-defined",
        name: "Required models defined",
        category: CATEGORY_ARCHITECTURE,
        priority: Priority::High,
        run: prisma::models_defined,
    },
    Checkpoint {
        id: "prisma-relations",
        name: "Relation annotations",
        category: CATEGORY_PERFORMANCE,
        priority: Priority::Medium,
        run: prisma::relations_defined,
    },
    Checkpoint {
        id: "prisma-indexes",
        name: "Index and uniqueness annotations",
        category: CATEGORY_PERFORMANCE,
        priority: Priority::Medium,
        run: prisma::indexes_defined,
    },
    Checkpoint {
        id: "prisma-soft-delete",
        name: "Soft-delete convention",
        category: CATEGORY_QUALITY,
        priority: Priority::Medium,
        run: prisma::soft_delete_convention,
    },
    Checkpoint {
        id: "prisma-timestamps",
        name: "Timestamp conventions",
        category: CATEGORY_QUALITY,
        priority: Priority::Medium,
        run: prisma::timestamp_conventions,
    },
    Checkpoint {
        id: "prisma-migrations",
        name: "Migrations directory",
        category: CATEGORY_QUALITY,
        priority: Priority::High,
        run: prisma::migrations_exist,
    },
    Checkpoint {
        id: "prisma-seed-data",
        name: "Seed script",
        category: CATEGORY_QUALITY,
        priority: Priority::Medium,
        run: prisma::seed_data_present,
    },
    Checkpoint {
        id: "env-database-url",
        name: "Database URL configuration",
        category: CATEGORY_SECURITY,
        priority: Priority::Critical,
        run: env::database_url_configured,
    },
    Checkpoint {
        id: "raw-query-audit",
        name: "Raw query audit",
        category: CATEGORY_SECURITY,
        priority: Priority::High,
        run: source::raw_query_audit,
    },
    Checkpoint {
        id: "db-backup-strategy",
        name: "Backup strategy",
        category: CATEGORY_SECURITY,
        priority: Priority::Low,
        run: source::backup_strategy,
    },
];

/// Run every registered checkpoint against `project_path`, in order.
///
/// The path need not exist -- each checkpoint handles absence itself.
/// A checkpoint returning `Err` is downgraded to a synthetic failed result
/// embedding the error text; the run never aborts and the report always
/// contains exactly one result per registered checkpoint.
pub fn validate(project_path: &Path) -> Report {
    let mut results = Vec::with_capacity(CHECKPOINTS.len());

    for checkpoint in CHECKPOINTS {
        let outcome = match (checkpoint.run)(project_path) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(id = checkpoint.id, error = %err, "checkpoint errored");
                CheckOutcome::failed(format!("checkpoint error: {err}"))
            }
        };

        tracing::debug!(
            id = checkpoint.id,
            status = outcome.status.as_str(),
            "checkpoint complete"
        );

        results.push(CheckResult {
            id: checkpoint.id,
            name: checkpoint.name,
            category: checkpoint.category,
            priority: checkpoint.priority,
            status: outcome.status,
            message: outcome.message,
        });
    }

    Report::new(project_path.display().to_string(), results)
}
