//! API Handlers

pub mod auth;
pub mod health;
pub mod metrics;
pub mod timeclock;
pub mod timesheets;
pub mod users;
pub mod workdays;

pub use auth::IdentityState;
pub use metrics::MetricsState;
pub use timeclock::LedgerState;
pub use timesheets::TimeSheetState;

use axum::{http::StatusCode, Json};

use crate::api::dto::ApiResponse;
use crate::domain::DomainError;

/// Map a domain failure to its HTTP status and error envelope.
///
/// Conflicting state (double punch, duplicate identity or photo) is
/// 409, unknown resources 404, bad credentials 401, policy denials 403,
/// rejected input 400, storage faults 500.
pub(crate) fn error_response<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &err {
        DomainError::AlreadyClockedIn { .. }
        | DomainError::NotClockedIn { .. }
        | DomainError::DuplicateIdentity { .. }
        | DomainError::DuplicatePhoto { .. } => StatusCode::CONFLICT,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidCredential => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::EmptySelection | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let cases: Vec<(DomainError, StatusCode)> = vec![
            (
                DomainError::AlreadyClockedIn { user_id: 1 },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::NotClockedIn { user_id: 1 },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::DuplicateIdentity {
                    field: "email",
                    value: "a@b.c".into(),
                },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::DuplicatePhoto {
                    filename: "x.jpg".into(),
                },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::not_found("WorkDay", 1),
                StatusCode::NOT_FOUND,
            ),
            (DomainError::InvalidCredential, StatusCode::UNAUTHORIZED),
            (
                DomainError::Forbidden("nope".into()),
                StatusCode::FORBIDDEN,
            ),
            (DomainError::EmptySelection, StatusCode::BAD_REQUEST),
            (
                DomainError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Storage("db gone".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let (status, Json(body)) = error_response::<()>(err);
            assert_eq!(status, expected);
            assert!(!body.success);
            assert!(body.error.is_some());
        }
    }
}
