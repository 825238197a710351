//! Internal access check.

use super::permissions::PermissionSet;

/// User ids of internal callers start with this prefix.
pub const INTERNAL_USER_PREFIX: &str = "internal_";

/// Permission that must be truthy for internal access.
pub const INTERNAL_ACCESS: &str = "internal_access";

/// Outcome of an internal access check, with the reason on denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    NotInternalUser,
    MissingGrant,
}

impl AccessDecision {
    pub fn is_granted(self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessDecision::Granted => "granted",
            AccessDecision::NotInternalUser => "not_internal_user",
            AccessDecision::MissingGrant => "missing_grant",
        }
    }
}

pub fn evaluate_internal_access(user_id: &str, permissions: &PermissionSet) -> AccessDecision {
    if !user_id.starts_with(INTERNAL_USER_PREFIX) {
        return AccessDecision::NotInternalUser;
    }
    if !permissions.is_granted(INTERNAL_ACCESS) {
        return AccessDecision::MissingGrant;
    }
    AccessDecision::Granted
}

/// True iff `user_id` is an internal user holding a truthy `internal_access`.
///
/// Total and pure: missing or falsy permissions yield `false`.
pub fn validate_internal_access(user_id: &str, permissions: &PermissionSet) -> bool {
    evaluate_internal_access(user_id, permissions).is_granted()
}
