//! TimeSheet repository interface

use async_trait::async_trait;

use super::model::TimeSheet;
use crate::domain::DomainResult;

#[async_trait]
pub trait TimeSheetRepository: Send + Sync {
    /// Create a timesheet and link exactly the given workday ids to it,
    /// archiving them. All-or-nothing: on any failure no row survives.
    ///
    /// Fails with `EmptySelection` for an empty id set, `NotFound` for an
    /// unknown workday id, `Forbidden` when a workday belongs to another
    /// user or is already archived, and `Validation` when one is still
    /// open. Returns the new timesheet id.
    async fn save(
        &self,
        user_id: i32,
        notes: Option<String>,
        workday_ids: &[i32],
    ) -> DomainResult<i32>;

    /// Reconstruct a timesheet with its member workdays (photos
    /// included), oldest workday first.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<TimeSheet>>;

    /// All timesheets of one user, most recent first (id descending).
    async fn find_for_user(&self, user_id: i32) -> DomainResult<Vec<TimeSheet>>;
}
