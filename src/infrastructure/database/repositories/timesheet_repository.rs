//! SeaORM implementation of TimeSheetRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::timesheet::{TimeSheet, TimeSheetRepository};
use crate::domain::workday::WorkDay;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{timesheet, timesheet_workday, workday};

use super::workday_repository::{load_photos, workday_to_domain};

pub struct SeaOrmTimeSheetRepository {
    db: DatabaseConnection,
}

impl SeaOrmTimeSheetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Member workdays of a saved sheet, oldest first, photos included.
/// Members are archived by definition.
async fn load_members<C: ConnectionTrait>(
    conn: &C,
    sheet: &timesheet::Model,
) -> DomainResult<Vec<WorkDay>> {
    let models = sheet
        .find_related(workday::Entity)
        .order_by_asc(workday::Column::ClockIn)
        .all(conn)
        .await
        .map_err(db_err)?;

    let mut work_days = Vec::with_capacity(models.len());
    for model in models {
        let photos = load_photos(conn, &model).await?;
        work_days.push(workday_to_domain(model, photos, true));
    }
    Ok(work_days)
}

// ── TimeSheetRepository impl ────────────────────────────────────

#[async_trait]
impl TimeSheetRepository for SeaOrmTimeSheetRepository {
    async fn save(
        &self,
        user_id: i32,
        notes: Option<String>,
        workday_ids: &[i32],
    ) -> DomainResult<i32> {
        if workday_ids.is_empty() {
            return Err(DomainError::EmptySelection);
        }
        debug!(user_id, count = workday_ids.len(), "Saving timesheet");

        let txn = self.db.begin().await.map_err(db_err)?;

        for &wd_id in workday_ids {
            let wd = workday::Entity::find_by_id(wd_id)
                .one(&txn)
                .await
                .map_err(db_err)?;
            let Some(wd) = wd else {
                txn.rollback().await.map_err(db_err)?;
                return Err(DomainError::not_found("WorkDay", wd_id));
            };
            if wd.user_id != user_id {
                txn.rollback().await.map_err(db_err)?;
                return Err(DomainError::Forbidden(format!(
                    "workday {} belongs to another user",
                    wd_id
                )));
            }
            if wd.clock_out.is_none() {
                txn.rollback().await.map_err(db_err)?;
                return Err(DomainError::Validation(format!(
                    "workday {} is still open",
                    wd_id
                )));
            }
            let links = timesheet_workday::Entity::find()
                .filter(timesheet_workday::Column::WorkdayId.eq(wd_id))
                .count(&txn)
                .await
                .map_err(db_err)?;
            if links > 0 {
                txn.rollback().await.map_err(db_err)?;
                return Err(DomainError::Forbidden(format!(
                    "workday {} is already archived",
                    wd_id
                )));
            }
        }

        let sheet = timesheet::ActiveModel {
            user_id: Set(user_id),
            notes: Set(notes),
            ..Default::default()
        };
        let sheet = sheet.insert(&txn).await.map_err(db_err)?;

        for &wd_id in workday_ids {
            let link = timesheet_workday::ActiveModel {
                timesheet_id: Set(sheet.id),
                workday_id: Set(wd_id),
            };
            link.insert(&txn).await.map_err(db_err)?;
        }
        txn.commit().await.map_err(db_err)?;

        Ok(sheet.id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<TimeSheet>> {
        let sheet = timesheet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(sheet) = sheet else {
            return Ok(None);
        };
        let work_days = load_members(&self.db, &sheet).await?;
        Ok(Some(TimeSheet {
            id: sheet.id,
            user_id: sheet.user_id,
            notes: sheet.notes,
            work_days,
        }))
    }

    async fn find_for_user(&self, user_id: i32) -> DomainResult<Vec<TimeSheet>> {
        let sheets = timesheet::Entity::find()
            .filter(timesheet::Column::UserId.eq(user_id))
            .order_by_desc(timesheet::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut out = Vec::with_capacity(sheets.len());
        for sheet in sheets {
            let work_days = load_members(&self.db, &sheet).await?;
            out.push(TimeSheet {
                id: sheet.id,
                user_id: sheet.user_id,
                notes: sheet.notes,
                work_days,
            });
        }
        Ok(out)
    }
}
