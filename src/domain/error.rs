//! Domain errors

use thiserror::Error;

/// Every failure mode a caller can observe from the core operations.
///
/// Each variant is a distinct, catchable condition; repository
/// implementations map storage faults into this taxonomy instead of
/// leaking driver errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User {user_id} is already clocked in")]
    AlreadyClockedIn { user_id: i32 },

    #[error("User {user_id} is not clocked in")]
    NotClockedIn { user_id: i32 },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already registered: {field}={value}")]
    DuplicateIdentity {
        field: &'static str,
        value: String,
    },

    #[error("Photo {filename} is already attached")]
    DuplicatePhoto { filename: String },

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("At least one workday must be selected")]
    EmptySelection,

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Shorthand for the common "row with this id does not exist" case.
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
