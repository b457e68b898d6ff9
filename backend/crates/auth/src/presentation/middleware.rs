//! Authorization Gate Middleware
//!
//! Bearer extraction, token verification, and role policy for protected
//! routes. Verified [`Claims`] are inserted into request extensions for
//! downstream handlers; any failure is terminal and answers 401 with the
//! generic detail. The role policy runs strictly before the request
//! reaches a handler, so an unauthorized call never touches a repository.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::token::{Claims, TokenService};
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub tokens: Arc<TokenService>,
}

impl AuthGateState {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Extract the bearer token from the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn authenticate(state: &AuthGateState, headers: &HeaderMap) -> AuthResult<Claims> {
    let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
    state.tokens.verify(token)
}

/// Middleware that requires a valid bearer token.
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = authenticate(&state, req.headers()).map_err(|e| e.into_response())?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that requires a valid bearer token carrying the admin role.
pub async fn require_admin(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = authenticate(&state, req.headers()).map_err(|e| e.into_response())?;

    if !claims.is_admin() {
        return Err(AuthError::Forbidden.into_response());
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
