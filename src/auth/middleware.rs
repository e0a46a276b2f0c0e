//! Authentication middleware for Axum

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::jwt::{verify_token, AuthError, JwtConfig};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;

/// Authentication state shared by all protected routes
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub repos: Arc<dyn RepositoryProvider>,
}

/// The session user, looked up fresh from storage for every request.
///
/// Carrying the full record (rather than trusting the claims) means a
/// deleted user is locked out the moment the row is gone, even while
/// their token is still within its lifetime.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Extract token from Authorization header
fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware, requires a valid token.
///
/// On success the materialized [`AuthenticatedUser`] is inserted into
/// the request extensions for handlers to pick up.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    let claims = match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => claims,
        Err(_) => return auth_error_response(AuthError::InvalidToken),
    };
    if claims.is_expired() {
        return auth_error_response(AuthError::ExpiredToken);
    }

    // Resolve the subject to a live user row
    let Some(user_id) = claims.user_id() else {
        return auth_error_response(AuthError::InvalidToken);
    };
    let user = match auth_state.repos.users().find_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return auth_error_response(AuthError::UnknownUser),
        Err(_) => return auth_error_response(AuthError::UnknownUser),
    };

    request.extensions_mut().insert(AuthenticatedUser { user });
    next.run(request).await
}

/// Create an authentication error response
fn auth_error_response(error: AuthError) -> Response {
    let message = match error {
        AuthError::MissingToken => "Missing authentication token",
        AuthError::InvalidToken => "Invalid authentication token",
        AuthError::ExpiredToken => "Token has expired",
        AuthError::UnknownUser => "Token does not belong to a known user",
    };

    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (StatusCode::UNAUTHORIZED, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_token("bearer abc"), None);
        assert_eq!(extract_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_token(""), None);
    }
}
