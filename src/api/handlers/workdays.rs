//! Workday correction API handlers
//!
//! Punch edits, notes and photo attachments on existing workdays.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::error_response;
use super::timeclock::LedgerState;
use crate::api::dto::{
    parse_time_of_day, ApiResponse, AttachPhotoRequest, EditWorkDayRequest, PhotoDto,
    SetNotesRequest, WorkDayDto,
};
use crate::api::extract::ValidatedJson;
use crate::auth::middleware::AuthenticatedUser;
use crate::domain::DomainError;

/// Edit a workday
///
/// Overwrites both punch times and the notes. The submitted times are
/// wall-clock (`HH:MM`); the stored calendar dates are kept. Archived
/// workdays answer 403. Owner or admin only.
#[utoipa::path(
    put,
    path = "/api/v1/workdays/{id}",
    tag = "Workdays",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "Workday id")
    ),
    request_body = EditWorkDayRequest,
    responses(
        (status = 200, description = "The edited workday", body = ApiResponse<WorkDayDto>),
        (status = 400, description = "Unparseable time or clock-out before clock-in"),
        (status = 403, description = "Workday is archived, or caller may not edit"),
        (status = 404, description = "No such workday")
    )
)]
pub async fn edit_workday(
    State(state): State<LedgerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<EditWorkDayRequest>,
) -> Result<Json<ApiResponse<WorkDayDto>>, (StatusCode, Json<ApiResponse<WorkDayDto>>)> {
    let clock_in = parse_time_of_day(&request.clock_in).ok_or_else(|| {
        error_response(DomainError::Validation(format!(
            "clock_in: cannot parse {:?} as HH:MM",
            request.clock_in
        )))
    })?;
    let clock_out = parse_time_of_day(&request.clock_out).ok_or_else(|| {
        error_response(DomainError::Validation(format!(
            "clock_out: cannot parse {:?} as HH:MM",
            request.clock_out
        )))
    })?;

    let day = state
        .ledger
        .edit(&auth.user, id, clock_in, clock_out, request.notes)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(WorkDayDto::from_domain(day))))
}

/// Replace the notes of a workday
///
/// Works on the caller's own workdays; owners and admins may annotate
/// anyone's. Unlike punch edits this also works on archived days.
#[utoipa::path(
    patch,
    path = "/api/v1/workdays/{id}/notes",
    tag = "Workdays",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "Workday id")
    ),
    request_body = SetNotesRequest,
    responses(
        (status = 200, description = "Notes replaced"),
        (status = 403, description = "Workday belongs to someone else"),
        (status = 404, description = "No such workday")
    )
)]
pub async fn set_notes(
    State(state): State<LedgerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<SetNotesRequest>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .ledger
        .set_notes(&auth.user, id, request.notes)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}

/// Attach a photo
///
/// Records an uploaded photo by filename and links it to the workday.
/// Filenames are unique across the whole system.
#[utoipa::path(
    post,
    path = "/api/v1/workdays/{id}/photos",
    tag = "Workdays",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "Workday id")
    ),
    request_body = AttachPhotoRequest,
    responses(
        (status = 201, description = "The photo record", body = ApiResponse<PhotoDto>),
        (status = 403, description = "Workday belongs to someone else"),
        (status = 404, description = "No such workday"),
        (status = 409, description = "Filename already attached")
    )
)]
pub async fn attach_photo(
    State(state): State<LedgerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<AttachPhotoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PhotoDto>>), (StatusCode, Json<ApiResponse<PhotoDto>>)> {
    let photo = state
        .ledger
        .attach_photo(&auth.user, id, &request.filename)
        .await
        .map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PhotoDto::from_domain(photo))),
    ))
}

/// Remove a photo
///
/// Deletes the photo record and its workday link. Owner or admin only.
#[utoipa::path(
    delete,
    path = "/api/v1/photos/{id}",
    tag = "Workdays",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "Photo id")
    ),
    responses(
        (status = 200, description = "Photo removed"),
        (status = 403, description = "Caller may not remove photos"),
        (status = 404, description = "No such photo")
    )
)]
pub async fn remove_photo(
    State(state): State<LedgerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .ledger
        .remove_photo(&auth.user, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
