//! Create workday_photos association table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_workdays::Workdays;
use super::m20250101_000003_create_photos::Photos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkdayPhotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkdayPhotos::PhotoId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkdayPhotos::WorkdayId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WorkdayPhotos::PhotoId)
                            .col(WorkdayPhotos::WorkdayId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workday_photos_photo")
                            .from(WorkdayPhotos::Table, WorkdayPhotos::PhotoId)
                            .to(Photos::Table, Photos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workday_photos_workday")
                            .from(WorkdayPhotos::Table, WorkdayPhotos::WorkdayId)
                            .to(Workdays::Table, Workdays::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for photo lookups by workday
        manager
            .create_index(
                Index::create()
                    .name("idx_workday_photos_workday")
                    .table(WorkdayPhotos::Table)
                    .col(WorkdayPhotos::WorkdayId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkdayPhotos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum WorkdayPhotos {
    Table,
    PhotoId,
    WorkdayId,
}
