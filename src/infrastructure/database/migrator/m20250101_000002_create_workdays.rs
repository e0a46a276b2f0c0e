//! Create workdays table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workdays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Workdays::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Workdays::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Workdays::ClockIn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Workdays::ClockOut).timestamp_with_time_zone())
                    .col(ColumnDef::new(Workdays::Notes).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workdays_user")
                            .from(Workdays::Table, Workdays::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One punch per user per instant
        manager
            .create_index(
                Index::create()
                    .name("idx_workdays_user_clock_in")
                    .table(Workdays::Table)
                    .col(Workdays::UserId)
                    .col(Workdays::ClockIn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create index for per-user ledger queries
        manager
            .create_index(
                Index::create()
                    .name("idx_workdays_user")
                    .table(Workdays::Table)
                    .col(Workdays::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workdays::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Workdays {
    Table,
    Id,
    UserId,
    ClockIn,
    ClockOut,
    Notes,
}
