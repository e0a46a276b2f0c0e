//! Create timesheets table

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
                    .table(Timesheets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Timesheets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Timesheets::UserId).integer().not_null())
                    .col(ColumnDef::new(Timesheets::Notes).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheets_user")
                            .from(Timesheets::Table, Timesheets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for per-user history queries
        manager
            .create_index(
                Index::create()
                    .name("idx_timesheets_user")
                    .table(Timesheets::Table)
                    .col(Timesheets::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timesheets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Timesheets {
    Table,
    Id,
    UserId,
    Notes,
}
