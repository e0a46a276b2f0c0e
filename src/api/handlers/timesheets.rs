//! Timesheet API handlers
//!
//! Draft assembly, the one-way save, review queries and the hours
//! overview.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error_response;
use crate::api::dto::{
    ApiResponse, OverviewEntryDto, SaveTimeSheetRequest, TimeSheetDraftDto, TimeSheetDto,
};
use crate::api::extract::ValidatedJson;
use crate::application::TimeSheetService;
use crate::auth::middleware::AuthenticatedUser;

/// State for the timesheet handlers
#[derive(Clone)]
pub struct TimeSheetState {
    pub timesheets: Arc<TimeSheetService>,
}

/// Optional target-user selector for review queries
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserQuery {
    /// Target user; defaults to the caller. Targeting someone else
    /// requires the owner or admin role.
    pub user_id: Option<i32>,
}

/// Current timesheet draft
///
/// Every clocked-out workday of the target user that is not yet on a
/// saved sheet, oldest first, with the running hour total.
#[utoipa::path(
    get,
    path = "/api/v1/timesheets/current",
    tag = "Timesheets",
    security(
        ("bearer_auth" = [])
    ),
    params(UserQuery),
    responses(
        (status = 200, description = "The draft", body = ApiResponse<TimeSheetDraftDto>),
        (status = 403, description = "Caller may not view this user's draft")
    )
)]
pub async fn current_timesheet(
    State(state): State<TimeSheetState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ApiResponse<TimeSheetDraftDto>>, (StatusCode, Json<ApiResponse<TimeSheetDraftDto>>)>
{
    let draft = state
        .timesheets
        .current(&auth.user, query.user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(TimeSheetDraftDto::from_domain(
        draft,
    ))))
}

/// Save a timesheet
///
/// Creates an immutable sheet over the selected workdays and archives
/// them, all-or-nothing. Owner or admin only.
#[utoipa::path(
    post,
    path = "/api/v1/timesheets",
    tag = "Timesheets",
    security(
        ("bearer_auth" = [])
    ),
    request_body = SaveTimeSheetRequest,
    responses(
        (status = 201, description = "The saved sheet", body = ApiResponse<TimeSheetDto>),
        (status = 400, description = "Empty selection or a still-open workday"),
        (status = 403, description = "Caller may not save, or a workday belongs to another user or is already archived"),
        (status = 404, description = "A selected workday does not exist")
    )
)]
pub async fn save_timesheet(
    State(state): State<TimeSheetState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<SaveTimeSheetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TimeSheetDto>>), (StatusCode, Json<ApiResponse<TimeSheetDto>>)>
{
    let sheet = state
        .timesheets
        .save(
            &auth.user,
            request.user_id,
            request.notes,
            &request.workday_ids,
        )
        .await
        .map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(TimeSheetDto::from_domain(sheet))),
    ))
}

/// Load a saved timesheet
///
/// Returns the sheet with its member workdays, photos included.
/// Owner or admin only.
#[utoipa::path(
    get,
    path = "/api/v1/timesheets/{id}",
    tag = "Timesheets",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "Timesheet id")
    ),
    responses(
        (status = 200, description = "The sheet", body = ApiResponse<TimeSheetDto>),
        (status = 403, description = "Caller may not review timesheets"),
        (status = 404, description = "No such timesheet")
    )
)]
pub async fn get_timesheet(
    State(state): State<TimeSheetState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TimeSheetDto>>, (StatusCode, Json<ApiResponse<TimeSheetDto>>)> {
    let sheet = state
        .timesheets
        .load(&auth.user, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(TimeSheetDto::from_domain(sheet))))
}

/// Past timesheets
///
/// All saved sheets of the target user, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/timesheets",
    tag = "Timesheets",
    security(
        ("bearer_auth" = [])
    ),
    params(UserQuery),
    responses(
        (status = 200, description = "Saved sheets, newest first", body = ApiResponse<Vec<TimeSheetDto>>),
        (status = 403, description = "Caller may not view this user's sheets")
    )
)]
pub async fn past_timesheets(
    State(state): State<TimeSheetState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ApiResponse<Vec<TimeSheetDto>>>, (StatusCode, Json<ApiResponse<Vec<TimeSheetDto>>>)>
{
    let sheets = state
        .timesheets
        .past(&auth.user, query.user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        sheets.into_iter().map(TimeSheetDto::from_domain).collect(),
    )))
}

/// Hours overview
///
/// One row per employee with the total hours of their current
/// (unarchived) workdays. Owner or admin only.
#[utoipa::path(
    get,
    path = "/api/v1/overview",
    tag = "Timesheets",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current hours per employee", body = ApiResponse<Vec<OverviewEntryDto>>),
        (status = 403, description = "Caller may not view the overview")
    )
)]
pub async fn overview(
    State(state): State<TimeSheetState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<OverviewEntryDto>>>, (StatusCode, Json<ApiResponse<Vec<OverviewEntryDto>>>)>
{
    let entries = state
        .timesheets
        .overview(&auth.user)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        entries
            .into_iter()
            .map(OverviewEntryDto::from_domain)
            .collect(),
    )))
}
