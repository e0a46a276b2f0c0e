//! Workday ledger module
//!
//! Contains the `LedgerService` which orchestrates the clock state
//! machine, punch corrections, notes and photo attachments.

pub mod service;

pub use service::LedgerService;
