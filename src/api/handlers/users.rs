//! User management API handlers
//!
//! All three routes are admin-gated; the service enforces the policy.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::auth::IdentityState;
use super::error_response;
use crate::api::dto::{ApiResponse, RegisterRequest, UserDto};
use crate::api::extract::ValidatedJson;
use crate::auth::middleware::AuthenticatedUser;
use crate::domain::user::Role;
use crate::domain::DomainError;

/// Register a user
///
/// Creates an account with a fixed role. Admin only.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    security(
        ("bearer_auth" = [])
    ),
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid email, password, role or username"),
        (status = 403, description = "Caller is not an admin"),
        (status = 409, description = "Email or username already registered")
    )
)]
pub async fn register_user(
    State(state): State<IdentityState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), (StatusCode, Json<ApiResponse<UserDto>>)> {
    let role = Role::from_str(&request.role).ok_or_else(|| {
        error_response(DomainError::Validation(format!(
            "unknown role: {}",
            request.role
        )))
    })?;

    let user = state
        .identity
        .register(
            &auth.user,
            &request.email,
            &request.password,
            role,
            request.username,
        )
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserDto::from_domain(user))),
    ))
}

/// Get a user by id
///
/// Admin only.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The account", body = ApiResponse<UserDto>),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<IdentityState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    let user = state
        .identity
        .lookup(&auth.user, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(UserDto::from_domain(user))))
}

/// Delete a user
///
/// Removes the account together with its workdays and timesheets.
/// Admin only.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No such user")
    )
)]
pub async fn delete_user(
    State(state): State<IdentityState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .identity
        .delete(&auth.user, id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
