//! Core business entities and repository interfaces

pub mod error;
pub mod repositories;
pub mod timesheet;
pub mod user;
pub mod workday;

pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use timesheet::{OverviewEntry, TimeSheet, TimeSheetDraft, TimeSheetRepository};
pub use user::{Action, NewUser, Role, User, UserRepository};
pub use workday::{Photo, WorkDay, WorkDayRepository};
