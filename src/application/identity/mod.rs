//! Identity module: user management and authentication
//!
//! Contains the `IdentityService` which orchestrates registration,
//! login, credential checks, lookups and account deletion.

pub mod service;

pub use service::{AuthResult, IdentityService};
