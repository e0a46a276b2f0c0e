//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod repository_provider;
pub mod timesheet_repository;
pub mod user_repository;
pub mod workday_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
