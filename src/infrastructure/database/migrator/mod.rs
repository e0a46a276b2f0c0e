//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_workdays;
mod m20250101_000003_create_photos;
mod m20250101_000004_create_workday_photos;
mod m20250101_000005_create_timesheets;
mod m20250101_000006_create_timesheet_workdays;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_workdays::Migration),
            Box::new(m20250101_000003_create_photos::Migration),
            Box::new(m20250101_000004_create_workday_photos::Migration),
            Box::new(m20250101_000005_create_timesheets::Migration),
            Box::new(m20250101_000006_create_timesheet_workdays::Migration),
        ]
    }
}
