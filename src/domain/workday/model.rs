//! WorkDay domain entity

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// An uploaded photo attached to a workday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Primary key
    pub id: i32,
    /// Stored filename, globally unique
    pub filename: String,
}

/// A single continuous work session.
///
/// Created open (no clock-out) by a clock-in; closed by a clock-out.
/// Once linked to a timesheet the workday is archived and read-only.
#[derive(Debug, Clone)]
pub struct WorkDay {
    /// Primary key
    pub id: i32,
    /// Owning user
    pub user_id: i32,
    /// When the user clocked in
    pub clock_in: DateTime<Utc>,
    /// When the user clocked out; `None` while the session is open
    pub clock_out: Option<DateTime<Utc>>,
    /// Free-text notes left by the user
    pub notes: Option<String>,
    /// Photos attached to this workday
    pub photos: Vec<Photo>,
    /// Whether this workday belongs to a saved timesheet
    pub archived: bool,
}

/// Round to the nearest quarter of an hour.
fn round_quarter(hours: f64) -> f64 {
    (hours * 4.0).round() / 4.0
}

impl WorkDay {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// The calendar date the session started.
    pub fn date(&self) -> NaiveDate {
        self.clock_in.date_naive()
    }

    /// Hours worked, rounded to the nearest quarter of an hour.
    ///
    /// Open sessions are measured against the current time. The rounding
    /// rule (multiply by 4, round, divide by 4) is a payroll contract:
    /// timesheet totals sum these per-day values and never re-round.
    pub fn hours(&self) -> f64 {
        let end = self.clock_out.unwrap_or_else(Utc::now);
        let seconds = (end - self.clock_in).num_seconds() as f64;
        round_quarter(seconds / 3600.0)
    }

    /// Replace the time-of-day of a punch, keeping its calendar date.
    ///
    /// Edits submit wall-clock times only; the stored date must survive
    /// the edit.
    pub fn merge_time_of_day(stamp: DateTime<Utc>, time: NaiveTime) -> DateTime<Utc> {
        stamp.date_naive().and_time(time).and_utc()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 3, hour, min, 0).unwrap()
    }

    fn sample_day(clock_in: DateTime<Utc>, clock_out: Option<DateTime<Utc>>) -> WorkDay {
        WorkDay {
            id: 1,
            user_id: 1,
            clock_in,
            clock_out,
            notes: None,
            photos: Vec::new(),
            archived: false,
        }
    }

    #[test]
    fn open_until_clocked_out() {
        let mut wd = sample_day(day(8, 0), None);
        assert!(wd.is_open());
        wd.clock_out = Some(day(16, 0));
        assert!(!wd.is_open());
    }

    #[test]
    fn hours_round_to_nearest_quarter() {
        // 8:16 worked -> 8.2667h -> nearest quarter is 8.25
        let wd = sample_day(day(8, 0), Some(day(16, 16)));
        assert_eq!(wd.hours(), 8.25);
        // repeated reads are stable
        assert_eq!(wd.hours(), 8.25);
    }

    #[test]
    fn exact_hours_are_untouched() {
        let wd = sample_day(day(8, 0), Some(day(16, 0)));
        assert_eq!(wd.hours(), 8.0);
    }

    #[test]
    fn short_overrun_rounds_down() {
        // 7 minutes past the hour rounds back down
        let wd = sample_day(day(8, 0), Some(day(16, 7)));
        assert_eq!(wd.hours(), 8.0);
    }

    #[test]
    fn eight_minutes_round_up() {
        let wd = sample_day(day(8, 0), Some(day(16, 8)));
        assert_eq!(wd.hours(), 8.25);
    }

    #[test]
    fn friday_short_day_rounds_to_six_three_quarters() {
        // 8:14 -> 15:00 is 6h46m = 6.7667h -> 6.75
        let wd = sample_day(day(8, 14), Some(day(15, 0)));
        assert_eq!(wd.hours(), 6.75);
    }

    #[test]
    fn merge_keeps_calendar_date() {
        let stamp = day(8, 0);
        let merged = WorkDay::merge_time_of_day(stamp, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(merged.date_naive(), stamp.date_naive());
        assert_eq!(merged, day(9, 30));
    }

    #[test]
    fn date_is_clock_in_date() {
        let wd = sample_day(day(8, 0), Some(day(16, 0)));
        assert_eq!(
            wd.date(),
            NaiveDate::from_ymd_opt(2022, 1, 3).unwrap()
        );
    }
}
