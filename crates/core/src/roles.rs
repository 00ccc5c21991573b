//! Well-known role name constants.
//!
//! These must match the role strings the identity provider puts in the
//! `roles` claim of access tokens.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_COMPLIANCE_OFFICER: &str = "compliance_officer";
pub const ROLE_CONTRIBUTOR: &str = "contributor";

/// All role names this service recognizes.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_COMPLIANCE_OFFICER, ROLE_CONTRIBUTOR];

/// Whether a role string is one this service recognizes.
///
/// Unknown roles in a token are not an error -- the provider may issue
/// roles for other services -- they simply grant nothing here.
pub fn role_is_known(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}
