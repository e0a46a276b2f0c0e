//! WorkDay repository interface

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};

use super::model::{Photo, WorkDay};
use crate::domain::DomainResult;

/// Storage contract for the workday ledger.
///
/// The clock state machine lives here: `clock_in`/`clock_out` run their
/// check-then-act sequence inside one transaction, so two concurrent
/// clock-ins for the same user cannot both succeed.
#[async_trait]
pub trait WorkDayRepository: Send + Sync {
    /// Open a new workday at `at`. Fails with `AlreadyClockedIn` when an
    /// open workday already exists for the user.
    async fn clock_in(&self, user_id: i32, at: DateTime<Utc>) -> DomainResult<WorkDay>;

    /// Close the user's open workday at `at`. Fails with `NotClockedIn`
    /// when no workday is open.
    async fn clock_out(&self, user_id: i32, at: DateTime<Utc>) -> DomainResult<WorkDay>;

    /// The most recently started workday for the user, open or closed.
    async fn find_latest(&self, user_id: i32) -> DomainResult<Option<WorkDay>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<WorkDay>>;

    /// Overwrite punch times and notes. The submitted times replace only
    /// the time-of-day; the stored calendar dates are kept. Fails with
    /// `Forbidden` when the workday is archived and `Validation` when the
    /// resulting clock-out would precede clock-in.
    async fn edit(
        &self,
        id: i32,
        clock_in: NaiveTime,
        clock_out: NaiveTime,
        notes: Option<String>,
    ) -> DomainResult<WorkDay>;

    /// Replace the notes only. Deliberately not guarded by the archived
    /// check that `edit` enforces.
    async fn set_notes(&self, id: i32, notes: Option<String>) -> DomainResult<()>;

    /// Create a photo and link it to the workday. Fails with
    /// `DuplicatePhoto` when the filename is already taken.
    async fn attach_photo(&self, workday_id: i32, filename: &str) -> DomainResult<Photo>;

    /// Delete a photo; association rows cascade. Returns whether a row
    /// was removed.
    async fn remove_photo(&self, photo_id: i32) -> DomainResult<bool>;

    /// True iff the workday is linked to any timesheet.
    async fn is_archived(&self, workday_id: i32) -> DomainResult<bool>;

    /// Clocked-out workdays not yet on any timesheet, oldest first.
    async fn find_unarchived_closed(&self, user_id: i32) -> DomainResult<Vec<WorkDay>>;
}
