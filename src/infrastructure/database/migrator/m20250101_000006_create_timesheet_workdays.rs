//! Create timesheet_workdays association table
//!
//! Membership here is what makes a workday archived.

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_workdays::Workdays;
use super::m20250101_000005_create_timesheets::Timesheets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimesheetWorkdays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimesheetWorkdays::TimesheetId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimesheetWorkdays::WorkdayId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TimesheetWorkdays::TimesheetId)
                            .col(TimesheetWorkdays::WorkdayId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_workdays_timesheet")
                            .from(TimesheetWorkdays::Table, TimesheetWorkdays::TimesheetId)
                            .to(Timesheets::Table, Timesheets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_workdays_workday")
                            .from(TimesheetWorkdays::Table, TimesheetWorkdays::WorkdayId)
                            .to(Workdays::Table, Workdays::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for archived-state lookups by workday
        manager
            .create_index(
                Index::create()
                    .name("idx_timesheet_workdays_workday")
                    .table(TimesheetWorkdays::Table)
                    .col(TimesheetWorkdays::WorkdayId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimesheetWorkdays::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TimesheetWorkdays {
    Table,
    TimesheetId,
    WorkdayId,
}
