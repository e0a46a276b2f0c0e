//! Timesheet DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::workday::WorkDayDto;
use crate::domain::timesheet::{OverviewEntry, TimeSheet, TimeSheetDraft};

/// Saved timesheet response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 2,
    "user_id": 7,
    "notes": "first half of january",
    "hours": 77.5,
    "start_date": "2022-01-03",
    "end_date": "2022-01-14",
    "work_days": []
}))]
pub struct TimeSheetDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Sum of the per-day rounded hours; never re-rounded
    pub hours: f64,
    /// Date of the oldest member workday
    pub start_date: Option<NaiveDate>,
    /// Date of the newest member workday
    pub end_date: Option<NaiveDate>,
    /// Member workdays, oldest first
    pub work_days: Vec<WorkDayDto>,
}

impl TimeSheetDto {
    pub fn from_domain(sheet: TimeSheet) -> Self {
        let hours = sheet.hours();
        let start_date = sheet.start_date();
        let end_date = sheet.end_date();
        Self {
            id: sheet.id,
            user_id: sheet.user_id,
            notes: sheet.notes,
            hours,
            start_date,
            end_date,
            work_days: sheet
                .work_days
                .into_iter()
                .map(WorkDayDto::from_domain)
                .collect(),
        }
    }
}

/// The not-yet-saved timesheet: every clocked-out, unarchived workday
/// of one user. Reviewers pick workday ids from here before saving.
#[derive(Debug, Serialize, ToSchema)]
pub struct TimeSheetDraftDto {
    pub user_id: i32,
    /// Sum of the per-day rounded hours
    pub hours: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Candidate workdays, oldest first
    pub work_days: Vec<WorkDayDto>,
}

impl TimeSheetDraftDto {
    pub fn from_domain(draft: TimeSheetDraft) -> Self {
        let hours = draft.hours();
        let start_date = draft.start_date();
        let end_date = draft.end_date();
        Self {
            user_id: draft.user_id,
            hours,
            start_date,
            end_date,
            work_days: draft
                .work_days
                .into_iter()
                .map(WorkDayDto::from_domain)
                .collect(),
        }
    }
}

/// Timesheet save request.
///
/// Archives the selected workdays atomically; the saved sheet has no
/// edit or delete path afterwards.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "user_id": 7,
    "notes": "first half of january",
    "workday_ids": [12, 13, 14, 15, 16]
}))]
pub struct SaveTimeSheetRequest {
    /// The employee the sheet covers
    pub user_id: i32,
    /// Reviewer notes
    pub notes: Option<String>,
    /// Workdays to include; must be closed, unarchived, and belong to
    /// `user_id`
    pub workday_ids: Vec<i32>,
}

/// One row of the hours overview
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "user_id": 7,
    "email": "jane@example.com",
    "username": "jane",
    "hours": 38.75
}))]
pub struct OverviewEntryDto {
    pub user_id: i32,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Total hours of the employee's current (unarchived) workdays
    pub hours: f64,
}

impl OverviewEntryDto {
    pub fn from_domain(entry: OverviewEntry) -> Self {
        Self {
            user_id: entry.user_id,
            email: entry.email,
            username: entry.username,
            hours: entry.hours,
        }
    }
}
