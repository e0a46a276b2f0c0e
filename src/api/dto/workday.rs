//! Workday DTOs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::workday::{Photo, WorkDay};

/// Photo attachment response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 3,
    "filename": "receipt-2022-01-03.jpg"
}))]
pub struct PhotoDto {
    pub id: i32,
    pub filename: String,
}

impl PhotoDto {
    pub fn from_domain(photo: Photo) -> Self {
        Self {
            id: photo.id,
            filename: photo.filename,
        }
    }
}

/// Workday response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 12,
    "user_id": 7,
    "date": "2022-01-03",
    "clock_in": "2022-01-03T08:00:00Z",
    "clock_out": "2022-01-03T16:16:00Z",
    "hours": 8.25,
    "notes": null,
    "photos": [],
    "archived": false
}))]
pub struct WorkDayDto {
    pub id: i32,
    pub user_id: i32,
    /// Calendar date of the clock-in
    pub date: NaiveDate,
    pub clock_in: DateTime<Utc>,
    /// `null` while the workday is still open
    pub clock_out: Option<DateTime<Utc>>,
    /// Hours worked, rounded to the nearest quarter hour. Open workdays
    /// are measured against the current time.
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub photos: Vec<PhotoDto>,
    /// `true` once the workday belongs to a saved timesheet
    pub archived: bool,
}

impl WorkDayDto {
    pub fn from_domain(day: WorkDay) -> Self {
        let hours = day.hours();
        Self {
            id: day.id,
            user_id: day.user_id,
            date: day.date(),
            clock_in: day.clock_in,
            clock_out: day.clock_out,
            hours,
            notes: day.notes,
            photos: day.photos.into_iter().map(PhotoDto::from_domain).collect(),
            archived: day.archived,
        }
    }
}

/// Clock status response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// `true` when the caller has an open workday
    pub clocked_in: bool,
    /// The open workday, or the last closed one; `null` before the
    /// first clock-in
    pub work_day: Option<WorkDayDto>,
}

/// Punch correction request.
///
/// Times are wall-clock (`HH:MM`, seconds optional) and replace only
/// the time-of-day of the stored punches; the calendar dates are kept.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "clock_in": "08:00",
    "clock_out": "16:00",
    "notes": "badge reader was down"
}))]
pub struct EditWorkDayRequest {
    /// New clock-in time of day
    #[validate(length(min = 1, message = "must not be empty"))]
    pub clock_in: String,
    /// New clock-out time of day
    #[validate(length(min = 1, message = "must not be empty"))]
    pub clock_out: String,
    /// Replacement notes; `null` clears them
    pub notes: Option<String>,
}

/// Parse a submitted time of day, `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Notes replacement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "notes": "forgot to clock out, corrected by owner"
}))]
pub struct SetNotesRequest {
    /// New notes; `null` clears them
    pub notes: Option<String>,
}

/// Photo attachment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "filename": "receipt-2022-01-03.jpg"
}))]
pub struct AttachPhotoRequest {
    /// Stored filename, globally unique
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_parse_with_and_without_seconds() {
        assert_eq!(
            parse_time_of_day("08:30"),
            NaiveTime::from_hms_opt(8, 30, 0)
        );
        assert_eq!(
            parse_time_of_day("16:05:30"),
            NaiveTime::from_hms_opt(16, 5, 30)
        );
        assert!(parse_time_of_day("8 am").is_none());
        assert!(parse_time_of_day("25:00").is_none());
        assert!(parse_time_of_day("").is_none());
    }
}
