//! TimeSheet domain entity

use chrono::NaiveDate;

use crate::domain::workday::WorkDay;

/// Sum of per-day hours. Each workday is already quarter-rounded; the
/// total is never re-rounded.
fn total_hours(work_days: &[WorkDay]) -> f64 {
    work_days.iter().map(WorkDay::hours).sum()
}

/// An immutable snapshot of a set of workdays, saved for payroll review.
///
/// Every member workday is archived the moment the sheet is saved.
#[derive(Debug, Clone)]
pub struct TimeSheet {
    /// Primary key
    pub id: i32,
    /// The employee the sheet covers
    pub user_id: i32,
    /// Reviewer notes
    pub notes: Option<String>,
    /// Member workdays, oldest first
    pub work_days: Vec<WorkDay>,
}

/// The not-yet-saved timesheet view: every clocked-out, unarchived
/// workday of one user. Owners pick from this set before saving.
#[derive(Debug, Clone)]
pub struct TimeSheetDraft {
    pub user_id: i32,
    pub work_days: Vec<WorkDay>,
}

/// One row of the owner dashboard: an employee and their current
/// (unarchived) hours.
#[derive(Debug, Clone)]
pub struct OverviewEntry {
    pub user_id: i32,
    pub email: String,
    pub username: Option<String>,
    pub hours: f64,
}

impl TimeSheet {
    pub fn hours(&self) -> f64 {
        total_hours(&self.work_days)
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.work_days.first().map(WorkDay::date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.work_days.last().map(WorkDay::date)
    }
}

impl TimeSheetDraft {
    pub fn hours(&self) -> f64 {
        total_hours(&self.work_days)
    }

    pub fn is_empty(&self) -> bool {
        self.work_days.is_empty()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.work_days.first().map(WorkDay::date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.work_days.last().map(WorkDay::date)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Days};

    /// Two weeks starting Monday 2022-01-03: Mon-Thu 8am-4pm, Fridays
    /// shortened to (8:10 + day index)am-3pm, weekends off.
    fn two_week_fixture() -> Vec<WorkDay> {
        let start = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
        let mut days = Vec::new();
        for n in 0..14u64 {
            let date = start + Days::new(n);
            let weekday = date.weekday().num_days_from_monday();
            let (clock_in, clock_out) = if weekday < 4 {
                (
                    date.and_hms_opt(8, 0, 0).unwrap(),
                    date.and_hms_opt(16, 0, 0).unwrap(),
                )
            } else if weekday == 4 {
                (
                    date.and_hms_opt(8, 10 + n as u32, 0).unwrap(),
                    date.and_hms_opt(15, 0, 0).unwrap(),
                )
            } else {
                continue;
            };
            days.push(WorkDay {
                id: n as i32 + 1,
                user_id: 1,
                clock_in: clock_in.and_utc(),
                clock_out: Some(clock_out.and_utc()),
                notes: None,
                photos: Vec::new(),
                archived: false,
            });
        }
        days
    }

    #[test]
    fn two_week_fixture_sums_to_77_5() {
        let draft = TimeSheetDraft {
            user_id: 1,
            work_days: two_week_fixture(),
        };
        assert_eq!(draft.work_days.len(), 10);
        assert_eq!(draft.hours(), 77.5);
    }

    #[test]
    fn saved_sheet_reports_same_total() {
        let sheet = TimeSheet {
            id: 1,
            user_id: 1,
            notes: Some("first half of january".into()),
            work_days: two_week_fixture(),
        };
        assert_eq!(sheet.hours(), 77.5);
    }

    #[test]
    fn empty_draft_has_no_hours() {
        let draft = TimeSheetDraft {
            user_id: 1,
            work_days: Vec::new(),
        };
        assert!(draft.is_empty());
        assert_eq!(draft.hours(), 0.0);
        assert!(draft.start_date().is_none());
        assert!(draft.end_date().is_none());
    }

    #[test]
    fn date_range_covers_both_weeks() {
        let draft = TimeSheetDraft {
            user_id: 1,
            work_days: two_week_fixture(),
        };
        assert_eq!(
            draft.start_date(),
            Some(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap())
        );
        assert_eq!(
            draft.end_date(),
            Some(NaiveDate::from_ymd_opt(2022, 1, 14).unwrap())
        );
    }

    #[test]
    fn totals_keep_quarter_precision() {
        // a single 6h46m friday rounds to 6.75 before summing
        let days: Vec<WorkDay> = two_week_fixture()
            .into_iter()
            .filter(|wd| wd.date().weekday().num_days_from_monday() == 4)
            .collect();
        let draft = TimeSheetDraft {
            user_id: 1,
            work_days: days,
        };
        assert_eq!(draft.hours(), 13.5);
    }
}
