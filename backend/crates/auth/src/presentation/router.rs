//! Route Definitions

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::sqlite::SqliteAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{require_auth, AuthGateState};

/// Public authentication routes (`POST /` and `POST /token`), intended to
/// be nested under `/auth`.
pub fn auth_router(pool: SqlitePool, tokens: Arc<TokenService>) -> Router {
    auth_router_with(Arc::new(SqliteAuthRepository::new(pool)), tokens)
}

/// Self-service routes behind the bearer gate, intended to be nested
/// under `/user`.
pub fn user_router(pool: SqlitePool, tokens: Arc<TokenService>) -> Router {
    user_router_with(Arc::new(SqliteAuthRepository::new(pool)), tokens)
}

pub fn auth_router_with<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, tokens };

    Router::new()
        .route("/", post(handlers::register::<R>))
        .route("/token", post(handlers::login::<R>))
        .with_state(state)
}

pub fn user_router_with<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState::new(tokens.clone());
    let state = AuthAppState { repo, tokens };

    Router::new()
        .route("/", get(handlers::get_user::<R>))
        .route("/password", put(handlers::change_password::<R>))
        .route(
            "/phonenumber/{phone_number}",
            put(handlers::change_phone_number::<R>),
        )
        .route_layer(from_fn_with_state(gate, require_auth))
        .with_state(state)
}
