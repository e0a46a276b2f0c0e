//! # Timeclock Service
//!
//! Employee time tracking: a punch clock that records workdays, and
//! owner-reviewed timesheets that freeze them into immutable records of
//! paid hours.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Use-case services and the role policy
//! - **infrastructure**: SeaORM persistence (entities, migrations, repositories)
//! - **api**: REST API with Swagger documentation
//! - **auth**: Password hashing, JWT minting and the bearer middleware

pub mod api;
pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::database::{init_database, DatabaseConfig};

// Re-export API router
pub use api::create_api_router;
