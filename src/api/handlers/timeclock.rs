//! Time clock API handlers
//!
//! Clock-in, clock-out and the punch status. All three operate on the
//! session user only.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::error_response;
use crate::api::dto::{ApiResponse, StatusResponse, WorkDayDto};
use crate::application::LedgerService;
use crate::auth::middleware::AuthenticatedUser;

/// State for the workday ledger handlers
#[derive(Clone)]
pub struct LedgerState {
    pub ledger: Arc<LedgerService>,
}

/// Clock in
///
/// Opens a new workday stamped with the current time. Fails with 409
/// while another workday is still open.
#[utoipa::path(
    post,
    path = "/api/v1/timeclock/clock-in",
    tag = "Time clock",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The opened workday", body = ApiResponse<WorkDayDto>),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Already clocked in")
    )
)]
pub async fn clock_in(
    State(state): State<LedgerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<WorkDayDto>>, (StatusCode, Json<ApiResponse<WorkDayDto>>)> {
    let day = state
        .ledger
        .clock_in(&auth.user)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(WorkDayDto::from_domain(day))))
}

/// Clock out
///
/// Closes the open workday stamped with the current time. Fails with
/// 409 when no workday is open.
#[utoipa::path(
    post,
    path = "/api/v1/timeclock/clock-out",
    tag = "Time clock",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The closed workday", body = ApiResponse<WorkDayDto>),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Not clocked in")
    )
)]
pub async fn clock_out(
    State(state): State<LedgerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<WorkDayDto>>, (StatusCode, Json<ApiResponse<WorkDayDto>>)> {
    let day = state
        .ledger
        .clock_out(&auth.user)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(WorkDayDto::from_domain(day))))
}

/// Punch status
///
/// Returns whether the caller is clocked in, together with the open
/// workday or the last closed one. `work_day` is `null` before the
/// first punch.
#[utoipa::path(
    get,
    path = "/api/v1/timeclock/status",
    tag = "Time clock",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current punch status", body = ApiResponse<StatusResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn status(
    State(state): State<LedgerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<StatusResponse>>, (StatusCode, Json<ApiResponse<StatusResponse>>)> {
    let day = state
        .ledger
        .current_or_last(&auth.user)
        .await
        .map_err(error_response)?;

    let response = StatusResponse {
        clocked_in: day.as_ref().is_some_and(|d| d.is_open()),
        work_day: day.map(WorkDayDto::from_domain),
    };
    Ok(Json(ApiResponse::success(response)))
}
