//! Reusable authorization policies.
//!
//! Two independent checks shared across the HTTP layer and the domain
//! services: role-set membership (used by the access-guard middleware) and
//! owner-or-admin (used by handlers that guard a specific resource).

use auth::Role;
use thiserror::Error;

use crate::domain::account::models::AccountId;

/// The verified identity of the caller, extracted from a validated token
/// and attached to the request context by the access guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub account_id: AccountId,
    pub role: Role,
}

/// Denial from the owner-or-admin policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Caller is neither the resource owner nor an admin")]
pub struct AccessDenied;

/// Role-set membership check.
///
/// An empty allowed set means "any authenticated identity".
pub fn role_allowed(role: Role, allowed: &[Role]) -> bool {
    allowed.is_empty() || allowed.contains(&role)
}

/// Owner-or-admin policy.
///
/// Allows iff the caller is an admin or the caller's account id equals the
/// resource owner's id. Identifiers are compared as canonical values, not
/// by reference.
pub fn ensure_owner_or_admin(
    caller: &CallerIdentity,
    owner: &AccountId,
) -> Result<(), AccessDenied> {
    if caller.role == Role::Admin || caller.account_id == *owner {
        Ok(())
    } else {
        Err(AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: Role) -> CallerIdentity {
        CallerIdentity {
            account_id: AccountId::new(),
            role,
        }
    }

    #[test]
    fn test_empty_role_set_allows_any_role() {
        assert!(role_allowed(Role::User, &[]));
        assert!(role_allowed(Role::Admin, &[]));
    }

    #[test]
    fn test_role_set_membership() {
        assert!(role_allowed(Role::Admin, &[Role::Admin]));
        assert!(!role_allowed(Role::User, &[Role::Admin]));
        assert!(role_allowed(Role::User, &[Role::User, Role::Admin]));
    }

    #[test]
    fn test_owner_may_access_own_resource() {
        let owner = caller(Role::User);
        assert!(ensure_owner_or_admin(&owner, &owner.account_id).is_ok());
    }

    #[test]
    fn test_admin_may_access_any_resource() {
        let admin = caller(Role::Admin);
        let someone_else = AccountId::new();
        assert!(ensure_owner_or_admin(&admin, &someone_else).is_ok());
    }

    #[test]
    fn test_other_user_is_denied() {
        let user = caller(Role::User);
        let someone_else = AccountId::new();
        assert_eq!(
            ensure_owner_or_admin(&user, &someone_else),
            Err(AccessDenied)
        );
    }
}
