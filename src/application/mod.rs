//! Application services
//!
//! Use-case orchestration between the HTTP handlers and the domain
//! repositories. Handlers stay thin; authorization and sequencing live
//! here, against the [`RepositoryProvider`](crate::domain::RepositoryProvider)
//! handle injected at construction.

pub mod identity;
pub mod ledger;
pub mod timesheet;

#[cfg(test)]
pub(crate) mod test_support;

pub use identity::{AuthResult, IdentityService};
pub use ledger::LedgerService;
pub use timesheet::TimeSheetService;

use crate::domain::user::{Action, User};
use crate::domain::{DomainError, DomainResult};

fn action_name(action: Action) -> &'static str {
    match action {
        Action::ManageUsers => "manage users",
        Action::EditWorkDays => "edit workdays",
        Action::ReviewTimeSheets => "review timesheets",
    }
}

/// Fail with `Forbidden` unless the principal's role allows the action.
pub(crate) fn require(principal: &User, action: Action) -> DomainResult<()> {
    if principal.role.allows(action) {
        Ok(())
    } else {
        Err(DomainError::Forbidden(format!(
            "role {} may not {}",
            principal.role.as_str(),
            action_name(action)
        )))
    }
}

/// Fail with `Forbidden` unless the principal owns the resource or their
/// role allows the action on anyone's.
pub(crate) fn require_owner_or(
    principal: &User,
    owner_id: i32,
    action: Action,
) -> DomainResult<()> {
    if principal.id == owner_id {
        Ok(())
    } else {
        require(principal, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Role;

    fn principal(id: i32, role: Role) -> User {
        User {
            id,
            email: format!("user{}@example.com", id),
            password_hash: "$2b$12$hash".into(),
            role,
            username: None,
        }
    }

    #[test]
    fn require_follows_role_policy() {
        assert!(require(&principal(1, Role::Admin), Action::ManageUsers).is_ok());
        assert!(require(&principal(2, Role::Owner), Action::ReviewTimeSheets).is_ok());

        let err = require(&principal(3, Role::Employee), Action::EditWorkDays).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[test]
    fn ownership_bypasses_the_role_check() {
        let employee = principal(3, Role::Employee);
        assert!(require_owner_or(&employee, 3, Action::EditWorkDays).is_ok());
        assert!(require_owner_or(&employee, 4, Action::EditWorkDays).is_err());
    }
}
