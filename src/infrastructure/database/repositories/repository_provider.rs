//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::timesheet::TimeSheetRepository;
use crate::domain::user::UserRepository;
use crate::domain::workday::WorkDayRepository;

use super::timesheet_repository::SeaOrmTimeSheetRepository;
use super::user_repository::SeaOrmUserRepository;
use super::workday_repository::SeaOrmWorkDayRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository
/// accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let user = repos.users().find_by_email("jane@example.com").await?;
/// let open = repos.work_days().find_latest(user.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    work_days: SeaOrmWorkDayRepository,
    timesheets: SeaOrmTimeSheetRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            work_days: SeaOrmWorkDayRepository::new(db.clone()),
            timesheets: SeaOrmTimeSheetRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn work_days(&self) -> &dyn WorkDayRepository {
        &self.work_days
    }

    fn timesheets(&self) -> &dyn TimeSheetRepository {
        &self.timesheets
    }
}
