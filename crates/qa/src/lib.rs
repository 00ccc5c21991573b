//! Project QA checkpoint engine.
//!
//! Audits a project directory against a fixed catalog of database and
//! configuration checkpoints: file presence, schema text patterns, and
//! source-tree content scans. Every run produces one result per registered
//! checkpoint -- a failing filesystem read degrades a single entry, never
//! the whole report.
//!
//! The schema file is treated as opaque text matched by regular
//! expressions. There is deliberately no parser: the checks assert the
//! presence of conventions, not semantic correctness.

pub mod checks;
pub mod error;
pub mod registry;
pub mod report;
pub mod scanner;

pub use error::QaError;
pub use registry::{validate, Checkpoint, CHECKPOINTS};
pub use report::{CheckOutcome, CheckResult, CheckStatus, Priority, Report};
