//! Authentication module
//!
//! JWT token-based authentication: bcrypt password hashing, token
//! minting/verification, and the Axum middleware that turns a bearer
//! token into a session user.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{create_token, verify_token, Claims, JwtConfig};
pub use middleware::{auth_middleware, AuthState, AuthenticatedUser};
pub use password::{hash_password, verify_password};
