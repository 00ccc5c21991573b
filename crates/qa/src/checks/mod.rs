//! Checkpoint functions, grouped by the project area they audit.
//!
//! Every function has the same contract: inspect the project directory,
//! return a [`CheckOutcome`](crate::report::CheckOutcome). A missing
//! prerequisite file is a `failed` outcome naming the file; `Err` is
//! reserved for unexpected I/O failures the runner will downgrade.

pub mod env;
pub mod prisma;
pub mod source;
