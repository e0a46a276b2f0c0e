//! User management service
//!
//! All user-related business logic lives here. HTTP handlers should be
//! thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::application::require;
use crate::auth::jwt::{create_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::{Action, NewUser, Role, User};
use crate::domain::{DomainError, DomainResult};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Identity service, orchestrates all user-management use-cases.
pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl IdentityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Check a credential pair against the registry.
    ///
    /// The two failure modes stay distinguishable: an unregistered email
    /// is `NotFound`, a wrong password for a known account is
    /// `InvalidCredential`.
    pub async fn verify(&self, email: &str, password: &str) -> DomainResult<User> {
        let user = self
            .repos
            .users()
            .find_by_email(email)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "email",
                value: email.to_string(),
            })?;

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::InvalidCredential);
        }
        Ok(user)
    }

    /// Authenticate by email + password and mint a JWT.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let user = self.verify(email, password).await?;

        let token = create_token(&user, &self.jwt_config)
            .map_err(|e| DomainError::Storage(format!("failed to sign token: {}", e)))?;

        info!(user_id = user.id, email = %user.email, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new account with a fixed role.
    ///
    /// Duplicate email/username surface as `DuplicateIdentity` from the
    /// unique constraints, so two concurrent registrations cannot both
    /// win.
    pub async fn register(
        &self,
        principal: &User,
        email: &str,
        password: &str,
        role: Role,
        username: Option<String>,
    ) -> DomainResult<User> {
        require(principal, Action::ManageUsers)?;

        if !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".into()));
        }
        if password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".into(),
            ));
        }
        if let Some(name) = &username {
            if name.is_empty() || name.len() > 50 {
                return Err(DomainError::Validation(
                    "Username must be 1-50 characters".into(),
                ));
            }
        }

        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Storage(format!("failed to hash password: {}", e)))?;

        let user = self
            .repos
            .users()
            .insert(NewUser {
                email: email.to_string(),
                password_hash,
                role,
                username,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, role = user.role.as_str(), "User registered");
        Ok(user)
    }

    // ── Queries and deletion ────────────────────────────────────

    /// Fetch one account by id.
    pub async fn lookup(&self, principal: &User, id: i32) -> DomainResult<User> {
        require(principal, Action::ManageUsers)?;
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    /// Delete an account. Workdays and timesheets cascade away with it.
    pub async fn delete(&self, principal: &User, id: i32) -> DomainResult<()> {
        require(principal, Action::ManageUsers)?;
        let removed = self.repos.users().delete(id).await?;
        if !removed {
            return Err(DomainError::not_found("User", id));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
