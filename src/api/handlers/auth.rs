//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::error_response;
use crate::api::dto::{ApiResponse, LoginRequest, LoginResponse, UserDto};
use crate::api::extract::ValidatedJson;
use crate::application::IdentityService;
use crate::auth::middleware::AuthenticatedUser;

/// State for the identity handlers (login, me, user management)
#[derive(Clone)]
pub struct IdentityState {
    pub identity: Arc<IdentityService>,
}

/// Log in
///
/// Returns a JWT on success; pass it in the
/// `Authorization: Bearer <token>` header. An unregistered email
/// answers 404, a wrong password 401.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, JWT in `data.token`", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "No account with this email")
    )
)]
pub async fn login(
    State(state): State<IdentityState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<LoginResponse>>)> {
    let auth = state
        .identity
        .login(&request.email, &request.password)
        .await
        .map_err(error_response)?;

    let response = LoginResponse {
        token: auth.token,
        token_type: auth.token_type,
        expires_in: auth.expires_in,
        user: UserDto::from_domain(auth.user),
    };
    Ok(Json(ApiResponse::success(response)))
}

/// Current session user
///
/// Returns the account the presented token belongs to. The user is
/// materialized from storage on every request, so a deleted account
/// answers 401 even with a fresh token.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The session user", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn get_current_user(
    Extension(auth): Extension<AuthenticatedUser>,
) -> Json<ApiResponse<UserDto>> {
    Json(ApiResponse::success(UserDto::from_domain(auth.user)))
}
