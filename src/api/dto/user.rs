//! User and authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::User;

/// User response DTO. The password hash never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 7,
    "email": "jane@example.com",
    "role": "EMPLOYEE",
    "username": "jane"
}))]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    /// Role: `ADMIN`, `OWNER` or `EMPLOYEE`
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl UserDto {
    pub fn from_domain(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role.as_str().to_string(),
            username: user.username,
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "jane@example.com",
    "password": "secret123"
}))]
pub struct LoginRequest {
    /// Login email
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Password
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Successful login response.
///
/// Carries the JWT for subsequent requests; pass it in the
/// `Authorization: Bearer <token>` header.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
    "token_type": "Bearer",
    "expires_in": 86400,
    "user": {
        "id": 7,
        "email": "jane@example.com",
        "role": "EMPLOYEE",
        "username": "jane"
    }
}))]
pub struct LoginResponse {
    /// JWT access token
    pub token: String,
    /// Token type (always `Bearer`)
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// The logged-in user
    pub user: UserDto,
}

/// Registration request (admin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "new.hire@example.com",
    "password": "a decent password",
    "role": "EMPLOYEE",
    "username": "newhire"
}))]
pub struct RegisterRequest {
    /// Login email, unique
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Password, at least 8 characters
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    /// Role: `ADMIN`, `OWNER` or `EMPLOYEE`; fixed for the lifetime of
    /// the account
    pub role: String,
    /// Optional display name, unique when present
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub username: Option<String>,
}
