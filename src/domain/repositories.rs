//! Repository provider for the domain layer

use crate::domain::timesheet::TimeSheetRepository;
use crate::domain::user::UserRepository;
use crate::domain::workday::WorkDayRepository;

/// Unified access to all per-aggregate repositories.
///
/// Injected into services at construction; consumers request only the
/// repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_id(1).await?;
///     let open = repos.work_days().find_latest(user.id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn work_days(&self) -> &dyn WorkDayRepository;
    fn timesheets(&self) -> &dyn TimeSheetRepository;
}
