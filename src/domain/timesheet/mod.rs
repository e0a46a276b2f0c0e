//! TimeSheet aggregate
//!
//! Contains the saved TimeSheet entity, the unsaved draft view, the
//! overview row, and the repository interface.

pub mod model;
pub mod repository;

pub use model::{OverviewEntry, TimeSheet, TimeSheetDraft};
pub use repository::TimeSheetRepository;
