//! WorkDay aggregate
//!
//! Contains the WorkDay entity, its photo attachments, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{Photo, WorkDay};
pub use repository::WorkDayRepository;
