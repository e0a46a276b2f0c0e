//! User repository interface

use async_trait::async_trait;

use super::model::{Role, User};
use crate::domain::DomainResult;

/// A user not yet persisted; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub username: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, surfacing unique-constraint violations on
    /// email/username as `DuplicateIdentity`.
    async fn insert(&self, user: NewUser) -> DomainResult<User>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn find_by_role(&self, role: Role) -> DomainResult<Vec<User>>;
    /// Delete a user; workdays and timesheets cascade. Returns whether a
    /// row was actually removed.
    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
