//! Timesheet module
//!
//! Contains the `TimeSheetService` which assembles drafts, saves
//! immutable sheets and serves the review queries.

pub mod service;

pub use service::TimeSheetService;
