//! Access layer (internal-user check over caller permissions).

pub mod permissions;
pub mod validator;

pub use permissions::{PermissionSet, PermissionValue};
pub use validator::{
    evaluate_internal_access, validate_internal_access, AccessDecision, INTERNAL_ACCESS,
    INTERNAL_USER_PREFIX,
};
