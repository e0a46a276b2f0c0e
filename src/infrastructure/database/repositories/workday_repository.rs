//! SeaORM implementation of WorkDayRepository

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use tracing::debug;

use crate::domain::workday::{Photo, WorkDay, WorkDayRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{photo, timesheet_workday, workday, workday_photo};

pub struct SeaOrmWorkDayRepository {
    db: DatabaseConnection,
}

impl SeaOrmWorkDayRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn photo_to_domain(p: photo::Model) -> Photo {
    Photo {
        id: p.id,
        filename: p.filename,
    }
}

pub(super) fn workday_to_domain(
    wd: workday::Model,
    photos: Vec<Photo>,
    archived: bool,
) -> WorkDay {
    WorkDay {
        id: wd.id,
        user_id: wd.user_id,
        clock_in: wd.clock_in,
        clock_out: wd.clock_out,
        notes: wd.notes,
        photos,
        archived,
    }
}

pub(super) async fn load_photos<C: ConnectionTrait>(
    conn: &C,
    wd: &workday::Model,
) -> DomainResult<Vec<Photo>> {
    let photos = wd
        .find_related(photo::Entity)
        .order_by_asc(photo::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?;
    Ok(photos.into_iter().map(photo_to_domain).collect())
}

async fn linked_to_timesheet<C: ConnectionTrait>(conn: &C, workday_id: i32) -> DomainResult<bool> {
    let links = timesheet_workday::Entity::find()
        .filter(timesheet_workday::Column::WorkdayId.eq(workday_id))
        .count(conn)
        .await
        .map_err(db_err)?;
    Ok(links > 0)
}

async fn hydrate<C: ConnectionTrait>(conn: &C, model: workday::Model) -> DomainResult<WorkDay> {
    let photos = load_photos(conn, &model).await?;
    let archived = linked_to_timesheet(conn, model.id).await?;
    Ok(workday_to_domain(model, photos, archived))
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── WorkDayRepository impl ──────────────────────────────────────

#[async_trait]
impl WorkDayRepository for SeaOrmWorkDayRepository {
    async fn clock_in(&self, user_id: i32, at: DateTime<Utc>) -> DomainResult<WorkDay> {
        debug!(user_id, "Clocking in");
        let txn = self.db.begin().await.map_err(db_err)?;

        let open = workday::Entity::find()
            .filter(workday::Column::UserId.eq(user_id))
            .filter(workday::Column::ClockOut.is_null())
            .one(&txn)
            .await
            .map_err(db_err)?;
        if open.is_some() {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::AlreadyClockedIn { user_id });
        }

        let model = workday::ActiveModel {
            user_id: Set(user_id),
            clock_in: Set(at),
            ..Default::default()
        };
        // The unique (user_id, clock_in) index catches a concurrent punch
        // that committed between our check and the insert.
        let inserted = model.insert(&txn).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::AlreadyClockedIn { user_id }
            } else {
                db_err(e)
            }
        })?;
        txn.commit().await.map_err(db_err)?;

        Ok(workday_to_domain(inserted, Vec::new(), false))
    }

    async fn clock_out(&self, user_id: i32, at: DateTime<Utc>) -> DomainResult<WorkDay> {
        debug!(user_id, "Clocking out");
        let txn = self.db.begin().await.map_err(db_err)?;

        let open = workday::Entity::find()
            .filter(workday::Column::UserId.eq(user_id))
            .filter(workday::Column::ClockOut.is_null())
            .order_by_desc(workday::Column::ClockIn)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let Some(open) = open else {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::NotClockedIn { user_id });
        };
        if at < open.clock_in {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::Validation(
                "clock-out would precede clock-in".to_string(),
            ));
        }

        let mut active: workday::ActiveModel = open.into();
        active.clock_out = Set(Some(at));
        let updated = active.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        hydrate(&self.db, updated).await
    }

    async fn find_latest(&self, user_id: i32) -> DomainResult<Option<WorkDay>> {
        let model = workday::Entity::find()
            .filter(workday::Column::UserId.eq(user_id))
            .order_by_desc(workday::Column::ClockIn)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        match model {
            Some(model) => Ok(Some(hydrate(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<WorkDay>> {
        let model = workday::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        match model {
            Some(model) => Ok(Some(hydrate(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn edit(
        &self,
        id: i32,
        clock_in: NaiveTime,
        clock_out: NaiveTime,
        notes: Option<String>,
    ) -> DomainResult<WorkDay> {
        debug!(workday_id = id, "Editing workday");
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = workday::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("WorkDay", id));
        };
        if linked_to_timesheet(&txn, id).await? {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::Forbidden(format!(
                "workday {} is archived",
                id
            )));
        }

        // Submitted times replace the time-of-day only; calendar dates
        // stay. An open workday gets its clock-out on the clock-in date.
        let new_clock_in = WorkDay::merge_time_of_day(existing.clock_in, clock_in);
        let clock_out_base = existing.clock_out.unwrap_or(existing.clock_in);
        let new_clock_out = WorkDay::merge_time_of_day(clock_out_base, clock_out);
        if new_clock_out < new_clock_in {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::Validation(
                "clock-out would precede clock-in".to_string(),
            ));
        }

        let mut active: workday::ActiveModel = existing.into();
        active.clock_in = Set(new_clock_in);
        active.clock_out = Set(Some(new_clock_out));
        active.notes = Set(notes);
        let updated = active.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        hydrate(&self.db, updated).await
    }

    async fn set_notes(&self, id: i32, notes: Option<String>) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = workday::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("WorkDay", id));
        };

        let mut active: workday::ActiveModel = existing.into();
        active.notes = Set(notes);
        active.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn attach_photo(&self, workday_id: i32, filename: &str) -> DomainResult<Photo> {
        debug!(workday_id, filename, "Attaching photo");
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = workday::Entity::find_by_id(workday_id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("WorkDay", workday_id));
        }

        let photo = photo::ActiveModel {
            filename: Set(filename.to_string()),
            ..Default::default()
        };
        let photo = photo.insert(&txn).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::DuplicatePhoto {
                    filename: filename.to_string(),
                }
            } else {
                db_err(e)
            }
        })?;

        let link = workday_photo::ActiveModel {
            photo_id: Set(photo.id),
            workday_id: Set(workday_id),
        };
        link.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(photo_to_domain(photo))
    }

    async fn remove_photo(&self, photo_id: i32) -> DomainResult<bool> {
        debug!(photo_id, "Removing photo");
        let res = photo::Entity::delete_by_id(photo_id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn is_archived(&self, workday_id: i32) -> DomainResult<bool> {
        linked_to_timesheet(&self.db, workday_id).await
    }

    async fn find_unarchived_closed(&self, user_id: i32) -> DomainResult<Vec<WorkDay>> {
        let models = workday::Entity::find()
            .filter(workday::Column::UserId.eq(user_id))
            .filter(workday::Column::ClockOut.is_not_null())
            .filter(
                workday::Column::Id.not_in_subquery(
                    Query::select()
                        .column(timesheet_workday::Column::WorkdayId)
                        .from(timesheet_workday::Entity)
                        .to_owned(),
                ),
            )
            .order_by_asc(workday::Column::ClockIn)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut work_days = Vec::with_capacity(models.len());
        for model in models {
            let photos = load_photos(&self.db, &model).await?;
            work_days.push(workday_to_domain(model, photos, false));
        }
        Ok(work_days)
    }
}
