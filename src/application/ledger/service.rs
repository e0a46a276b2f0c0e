//! Workday ledger service
//!
//! The clock state machine plus the owner-side correction operations.
//! Authorization happens here; the repository enforces the storage
//! invariants (single open day, archived immutability).

use std::sync::Arc;

use chrono::{NaiveTime, Utc};
use tracing::info;

use crate::application::{require, require_owner_or};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::{Action, User};
use crate::domain::workday::{Photo, WorkDay};
use crate::domain::{DomainError, DomainResult};

/// Ledger service, orchestrates all workday use-cases.
pub struct LedgerService {
    repos: Arc<dyn RepositoryProvider>,
}

impl LedgerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Clocking ────────────────────────────────────────────────

    /// Open a new workday for the caller, stamped now.
    pub async fn clock_in(&self, principal: &User) -> DomainResult<WorkDay> {
        let day = self
            .repos
            .work_days()
            .clock_in(principal.id, Utc::now())
            .await?;
        info!(user_id = principal.id, workday_id = day.id, "Clocked in");
        Ok(day)
    }

    /// Close the caller's open workday, stamped now.
    pub async fn clock_out(&self, principal: &User) -> DomainResult<WorkDay> {
        let day = self
            .repos
            .work_days()
            .clock_out(principal.id, Utc::now())
            .await?;
        info!(
            user_id = principal.id,
            workday_id = day.id,
            hours = day.hours(),
            "Clocked out"
        );
        Ok(day)
    }

    /// The caller's open workday, or their last closed one, or nothing
    /// if they never clocked in.
    pub async fn current_or_last(&self, principal: &User) -> DomainResult<Option<WorkDay>> {
        self.repos.work_days().find_latest(principal.id).await
    }

    // ── Corrections ─────────────────────────────────────────────

    /// Overwrite the punch times (time-of-day only) and notes of a
    /// workday. Archived days are immutable through this path.
    pub async fn edit(
        &self,
        principal: &User,
        workday_id: i32,
        clock_in: NaiveTime,
        clock_out: NaiveTime,
        notes: Option<String>,
    ) -> DomainResult<WorkDay> {
        require(principal, Action::EditWorkDays)?;
        let day = self
            .repos
            .work_days()
            .edit(workday_id, clock_in, clock_out, notes)
            .await?;
        info!(workday_id, editor = principal.id, "Workday punches edited");
        Ok(day)
    }

    /// Replace the notes of a workday the caller owns (or any workday,
    /// for editors). Works on archived days as well; notes are
    /// commentary, not payroll data.
    pub async fn set_notes(
        &self,
        principal: &User,
        workday_id: i32,
        notes: Option<String>,
    ) -> DomainResult<()> {
        let day = self.find_existing(workday_id).await?;
        require_owner_or(principal, day.user_id, Action::EditWorkDays)?;
        self.repos.work_days().set_notes(workday_id, notes).await
    }

    /// Attach an uploaded photo to a workday by filename.
    pub async fn attach_photo(
        &self,
        principal: &User,
        workday_id: i32,
        filename: &str,
    ) -> DomainResult<Photo> {
        let day = self.find_existing(workday_id).await?;
        require_owner_or(principal, day.user_id, Action::EditWorkDays)?;
        let photo = self.repos.work_days().attach_photo(workday_id, filename).await?;
        info!(workday_id, photo_id = photo.id, "Photo attached");
        Ok(photo)
    }

    /// Detach and delete a photo.
    pub async fn remove_photo(&self, principal: &User, photo_id: i32) -> DomainResult<()> {
        require(principal, Action::EditWorkDays)?;
        let removed = self.repos.work_days().remove_photo(photo_id).await?;
        if !removed {
            return Err(DomainError::not_found("Photo", photo_id));
        }
        info!(photo_id, "Photo removed");
        Ok(())
    }

    async fn find_existing(&self, workday_id: i32) -> DomainResult<WorkDay> {
        self.repos
            .work_days()
            .find_by_id(workday_id)
            .await?
            .ok_or_else(|| DomainError::not_found("WorkDay", workday_id))
    }
}

// ── Tests ──────────────────────────────────────────────────────
