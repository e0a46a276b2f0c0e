//! User aggregate
//!
//! Contains the User entity, the role policy, and the repository
//! interface.

pub mod model;
pub mod repository;

pub use model::{Action, Role, User};
pub use repository::{NewUser, UserRepository};
