//! Timesheet service
//!
//! Drafts, saved sheets and the hours overview. Saving is the one
//! mutation: it archives the selected workdays atomically and there is
//! no edit or delete path afterwards.

use std::sync::Arc;

use tracing::info;

use crate::application::{require, require_owner_or};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::timesheet::{OverviewEntry, TimeSheet, TimeSheetDraft};
use crate::domain::user::{Action, Role, User};
use crate::domain::workday::WorkDay;
use crate::domain::{DomainError, DomainResult};

/// Timesheet service, orchestrates draft assembly and review.
pub struct TimeSheetService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TimeSheetService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// The not-yet-saved sheet: every clocked-out, unarchived workday of
    /// the target user, oldest first. Employees see their own; reviewers
    /// may target anyone via `user_id`.
    pub async fn current(
        &self,
        principal: &User,
        user_id: Option<i32>,
    ) -> DomainResult<TimeSheetDraft> {
        let target = user_id.unwrap_or(principal.id);
        require_owner_or(principal, target, Action::ReviewTimeSheets)?;

        let work_days = self.repos.work_days().find_unarchived_closed(target).await?;
        Ok(TimeSheetDraft {
            user_id: target,
            work_days,
        })
    }

    /// Persist a sheet over the selected workdays, archiving them.
    pub async fn save(
        &self,
        principal: &User,
        user_id: i32,
        notes: Option<String>,
        workday_ids: &[i32],
    ) -> DomainResult<TimeSheet> {
        require(principal, Action::ReviewTimeSheets)?;
        if workday_ids.is_empty() {
            return Err(DomainError::EmptySelection);
        }

        let id = self
            .repos
            .timesheets()
            .save(user_id, notes, workday_ids)
            .await?;
        info!(
            timesheet_id = id,
            user_id,
            days = workday_ids.len(),
            reviewer = principal.id,
            "Timesheet saved"
        );

        self.repos
            .timesheets()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("TimeSheet", id))
    }

    /// Reload one saved sheet with its member workdays.
    pub async fn load(&self, principal: &User, id: i32) -> DomainResult<TimeSheet> {
        require(principal, Action::ReviewTimeSheets)?;
        self.repos
            .timesheets()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("TimeSheet", id))
    }

    /// All saved sheets of one user, newest first. Employees see their
    /// own history; reviewers may target anyone.
    pub async fn past(
        &self,
        principal: &User,
        user_id: Option<i32>,
    ) -> DomainResult<Vec<TimeSheet>> {
        let target = user_id.unwrap_or(principal.id);
        require_owner_or(principal, target, Action::ReviewTimeSheets)?;
        self.repos.timesheets().find_for_user(target).await
    }

    /// The review dashboard: every employee with the total hours of
    /// their current (unarchived, clocked-out) workdays.
    pub async fn overview(&self, principal: &User) -> DomainResult<Vec<OverviewEntry>> {
        require(principal, Action::ReviewTimeSheets)?;

        let employees = self.repos.users().find_by_role(Role::Employee).await?;
        let mut entries = Vec::with_capacity(employees.len());
        for user in employees {
            let days = self.repos.work_days().find_unarchived_closed(user.id).await?;
            let hours = days.iter().map(WorkDay::hours).sum();
            entries.push(OverviewEntry {
                user_id: user.id,
                email: user.email,
                username: user.username,
                hours,
            });
        }
        Ok(entries)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{at, seed_user, setup_repos};
    use chrono::{Datelike, Days, NaiveDate};

    /// Punch the two-week schedule: Mon-Thu 8-16, Fridays shortened to
    /// (8:10 + day index) through 15:00, weekends off. Totals 77.5h.
    async fn punch_two_weeks(repos: &dyn RepositoryProvider, user_id: i32) -> Vec<i32> {
        let start = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
        let mut ids = Vec::new();
        for n in 0..14u64 {
            let date = start + Days::new(n);
            let weekday = date.weekday().num_days_from_monday();
            let (start_t, end_t) = if weekday < 4 {
                ((8, 0), (16, 0))
            } else if weekday == 4 {
                ((8, 10 + n as u32), (15, 0))
            } else {
                continue;
            };
            let day = repos
                .work_days()
                .clock_in(user_id, at(date.day(), start_t.0, start_t.1))
                .await
                .unwrap();
            repos
                .work_days()
                .clock_out(user_id, at(date.day(), end_t.0, end_t.1))
                .await
                .unwrap();
            ids.push(day.id);
        }
        ids
    }

    #[tokio::test]
    async fn two_weeks_of_punches_draft_to_77_5_hours() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let ids = punch_two_weeks(repos.as_ref(), jane.id).await;
        let svc = TimeSheetService::new(repos);

        let draft = svc.current(&jane, None).await.unwrap();
        assert_eq!(draft.work_days.len(), 10);
        assert_eq!(draft.hours(), 77.5);
        assert_eq!(
            draft.work_days.iter().map(|d| d.id).collect::<Vec<_>>(),
            ids,
            "draft lists oldest first"
        );
    }

    #[tokio::test]
    async fn draft_skips_open_and_archived_days() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;

        let first = repos.work_days().clock_in(jane.id, at(3, 8, 0)).await.unwrap();
        repos.work_days().clock_out(jane.id, at(3, 16, 0)).await.unwrap();
        let second = repos.work_days().clock_in(jane.id, at(4, 8, 0)).await.unwrap();
        repos.work_days().clock_out(jane.id, at(4, 16, 0)).await.unwrap();
        // third stays open
        repos.work_days().clock_in(jane.id, at(5, 8, 0)).await.unwrap();

        let svc = TimeSheetService::new(repos);
        svc.save(&owner, jane.id, None, &[first.id]).await.unwrap();

        let draft = svc.current(&jane, None).await.unwrap();
        assert_eq!(
            draft.work_days.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![second.id]
        );
    }

    #[tokio::test]
    async fn save_archives_and_reload_reports_the_same_total() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;
        let ids = punch_two_weeks(repos.as_ref(), jane.id).await;
        let svc = TimeSheetService::new(repos.clone());

        let sheet = svc
            .save(&owner, jane.id, Some("first half of january".into()), &ids)
            .await
            .unwrap();
        assert_eq!(sheet.user_id, jane.id);
        assert_eq!(sheet.work_days.len(), 10);
        assert_eq!(sheet.hours(), 77.5);
        assert_eq!(
            sheet.start_date(),
            Some(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap())
        );
        assert_eq!(
            sheet.end_date(),
            Some(NaiveDate::from_ymd_opt(2022, 1, 14).unwrap())
        );

        // every member is archived now
        for id in &ids {
            assert!(repos.work_days().is_archived(*id).await.unwrap());
        }

        // and the draft is empty again
        let draft = svc.current(&jane, None).await.unwrap();
        assert!(draft.is_empty());

        let reloaded = svc.load(&owner, sheet.id).await.unwrap();
        assert_eq!(reloaded.hours(), 77.5);
        assert_eq!(reloaded.notes.as_deref(), Some("first half of january"));
        assert_eq!(
            reloaded.work_days.iter().map(|d| d.id).collect::<Vec<_>>(),
            ids,
            "reloaded members are exactly the saved selection"
        );
    }

    #[tokio::test]
    async fn save_rejects_an_empty_selection() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;
        let svc = TimeSheetService::new(repos);

        let err = svc.save(&owner, jane.id, None, &[]).await.unwrap_err();
        assert!(matches!(err, DomainError::EmptySelection));

        // no sheet row was created
        assert!(svc.past(&owner, Some(jane.id)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_is_all_or_nothing() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;

        let closed = repos.work_days().clock_in(jane.id, at(3, 8, 0)).await.unwrap();
        repos.work_days().clock_out(jane.id, at(3, 16, 0)).await.unwrap();
        let open = repos.work_days().clock_in(jane.id, at(4, 8, 0)).await.unwrap();

        let svc = TimeSheetService::new(repos.clone());
        let err = svc
            .save(&owner, jane.id, None, &[closed.id, open.id])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // nothing was archived by the failed attempt
        assert!(!repos.work_days().is_archived(closed.id).await.unwrap());
        assert!(svc.past(&owner, Some(jane.id)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_rejects_foreign_unknown_and_archived_days() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let bob = seed_user(repos.as_ref(), Role::Employee, "bob@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;

        let janes = repos.work_days().clock_in(jane.id, at(3, 8, 0)).await.unwrap();
        repos.work_days().clock_out(jane.id, at(3, 16, 0)).await.unwrap();
        let bobs = repos.work_days().clock_in(bob.id, at(3, 9, 0)).await.unwrap();
        repos.work_days().clock_out(bob.id, at(3, 17, 0)).await.unwrap();

        let svc = TimeSheetService::new(repos);

        let err = svc
            .save(&owner, jane.id, None, &[janes.id, bobs.id])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let err = svc.save(&owner, jane.id, None, &[9999]).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        svc.save(&owner, jane.id, None, &[janes.id]).await.unwrap();
        let err = svc.save(&owner, jane.id, None, &[janes.id]).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn review_operations_are_role_gated() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let bob = seed_user(repos.as_ref(), Role::Employee, "bob@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;

        let day = repos.work_days().clock_in(jane.id, at(3, 8, 0)).await.unwrap();
        repos.work_days().clock_out(jane.id, at(3, 16, 0)).await.unwrap();

        let svc = TimeSheetService::new(repos);
        let sheet = svc.save(&owner, jane.id, None, &[day.id]).await.unwrap();

        // employees cannot save, load, or see the overview
        let err = svc.save(&jane, jane.id, None, &[day.id]).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        let err = svc.load(&jane, sheet.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        let err = svc.overview(&jane).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        // nor peek at another employee's draft or history
        let err = svc.current(&bob, Some(jane.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        let err = svc.past(&bob, Some(jane.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        // but their own draft and history are fine
        assert!(svc.current(&jane, None).await.unwrap().is_empty());
        assert_eq!(svc.past(&jane, None).await.unwrap().len(), 1);

        let err = svc.load(&owner, 9999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn past_sheets_come_newest_first() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;
        let svc = TimeSheetService::new(repos.clone());

        let mut sheet_ids = Vec::new();
        for week in 0..3u32 {
            let day = repos
                .work_days()
                .clock_in(jane.id, at(3 + week * 7, 8, 0))
                .await
                .unwrap();
            repos
                .work_days()
                .clock_out(jane.id, at(3 + week * 7, 16, 0))
                .await
                .unwrap();
            let sheet = svc.save(&owner, jane.id, None, &[day.id]).await.unwrap();
            sheet_ids.push(sheet.id);
        }

        let past = svc.past(&owner, Some(jane.id)).await.unwrap();
        let listed: Vec<i32> = past.iter().map(|s| s.id).collect();
        sheet_ids.reverse();
        assert_eq!(listed, sheet_ids);
    }

    #[tokio::test]
    async fn overview_lists_every_employee_with_current_hours() {
        let repos = setup_repos().await;
        let jane = seed_user(repos.as_ref(), Role::Employee, "jane@example.com").await;
        let bob = seed_user(repos.as_ref(), Role::Employee, "bob@example.com").await;
        let owner = seed_user(repos.as_ref(), Role::Owner, "owner@example.com").await;

        // jane: one 8h day; bob: nothing yet
        let day = repos.work_days().clock_in(jane.id, at(3, 8, 0)).await.unwrap();
        repos.work_days().clock_out(jane.id, at(3, 16, 0)).await.unwrap();

        let svc = TimeSheetService::new(repos.clone());
        let entries = svc.overview(&owner).await.unwrap();
        assert_eq!(entries.len(), 2, "owners themselves are not listed");
        let janes = entries.iter().find(|e| e.user_id == jane.id).unwrap();
        assert_eq!(janes.hours, 8.0);
        assert_eq!(janes.email, "jane@example.com");
        let bobs = entries.iter().find(|e| e.user_id == bob.id).unwrap();
        assert_eq!(bobs.hours, 0.0);

        // archiving jane's day zeroes her current hours
        svc.save(&owner, jane.id, None, &[day.id]).await.unwrap();
        let entries = svc.overview(&owner).await.unwrap();
        let janes = entries.iter().find(|e| e.user_id == jane.id).unwrap();
        assert_eq!(janes.hours, 0.0);
    }
}
