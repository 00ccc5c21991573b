//! Intake status constants and the approval workflow rules.
//!
//! Defines the valid lifecycle states for a registered AI system and the
//! policy checks applied when a reviewer records an approval decision.

use crate::error::CoreError;
use crate::types::EntityId;

/// System is being drafted and has not been submitted for review.
pub const STATUS_DRAFT: &str = "draft";

/// System is awaiting a governance review decision.
pub const STATUS_PENDING_REVIEW: &str = "pending_review";

/// System was approved for operation.
pub const STATUS_APPROVED: &str = "approved";

/// System was rejected.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid lifecycle states.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_PENDING_REVIEW,
    STATUS_APPROVED,
    STATUS_REJECTED,
];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Whether a system in `status` may still receive an approval decision.
pub fn is_decidable(status: &str) -> bool {
    status == STATUS_DRAFT || status == STATUS_PENDING_REVIEW
}

/// Segregation-of-Duties check: the creator of a system may not approve it.
///
/// Callers must resolve both identities *before* invoking this -- a failed
/// creator lookup is an error to surface, never a reason to let the
/// decision through.
pub fn check_segregation(creator: EntityId, approver: EntityId) -> Result<(), CoreError> {
    if creator == approver {
        return Err(CoreError::Forbidden(
            "Segregation of duties: the creator of a system cannot approve it".into(),
        ));
    }
    Ok(())
}
