//! User domain entity and role policy

use serde::{Deserialize, Serialize};

/// Account role, a closed set.
///
/// Stored as its string name; there is no role-update path, the role is
/// fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Unrestricted
    Admin,
    /// Reviews timesheets and the hours overview, edits punches
    Owner,
    /// Clocks in/out and views own data
    Employee,
}

/// Privileged capabilities gated by [`Role::allows`].
///
/// Self-service operations (clocking in/out, viewing own data) are not
/// listed here; those are ownership checks, not role checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Register, look up, delete accounts
    ManageUsers,
    /// Edit punches and remove photos on any workday
    EditWorkDays,
    /// Save/load timesheets and view the hours overview
    ReviewTimeSheets,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Owner => "OWNER",
            Self::Employee => "EMPLOYEE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Self::Admin),
            "OWNER" => Some(Self::Owner),
            "EMPLOYEE" => Some(Self::Employee),
            _ => None,
        }
    }

    /// Central authorization decision: may this role perform the action?
    pub fn allows(&self, action: Action) -> bool {
        match self {
            Self::Admin => true,
            Self::Owner => matches!(
                action,
                Action::EditWorkDays | Action::ReviewTimeSheets
            ),
            Self::Employee => false,
        }
    }
}

/// Identity record
#[derive(Debug, Clone)]
pub struct User {
    /// Primary key
    pub id: i32,
    /// Login identity, globally unique
    pub email: String,
    /// Salted bcrypt hash; the plaintext is never stored or logged
    pub password_hash: String,
    /// Fixed at registration
    pub role: Role,
    /// Optional display name, globally unique when present
    pub username: Option<String>,
}

impl User {
    /// Display name falling back to the email.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        for role in &[Role::Admin, Role::Owner, Role::Employee] {
            let s = role.as_str();
            assert_eq!(Role::from_str(s), Some(*role));
        }
        assert!(Role::from_str("MANAGER").is_none());
    }

    #[test]
    fn admin_allows_everything() {
        for action in [
            Action::ManageUsers,
            Action::EditWorkDays,
            Action::ReviewTimeSheets,
        ] {
            assert!(Role::Admin.allows(action));
        }
    }

    #[test]
    fn owner_reviews_but_does_not_manage_users() {
        assert!(Role::Owner.allows(Action::EditWorkDays));
        assert!(Role::Owner.allows(Action::ReviewTimeSheets));
        assert!(!Role::Owner.allows(Action::ManageUsers));
    }

    #[test]
    fn employee_has_no_privileged_actions() {
        for action in [
            Action::ManageUsers,
            Action::EditWorkDays,
            Action::ReviewTimeSheets,
        ] {
            assert!(!Role::Employee.allows(action));
        }
    }

    #[test]
    fn display_name_prefers_username() {
        let mut user = User {
            id: 1,
            email: "jane@example.com".into(),
            password_hash: "$2b$12$hash".into(),
            role: Role::Employee,
            username: Some("jane".into()),
        };
        assert_eq!(user.display_name(), "jane");
        user.username = None;
        assert_eq!(user.display_name(), "jane@example.com");
    }
}
