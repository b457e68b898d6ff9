//! Route Definitions

use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use auth::TokenService;
use auth::middleware::{require_admin, require_auth, AuthGateState};

use crate::domain::repository::TodoRepository;
use crate::infra::sqlite::SqliteTodoRepository;
use crate::presentation::handlers::{self, TodoAppState};

/// Owner-scoped todo routes behind the bearer gate, intended to be nested
/// under `/todos`.
pub fn todo_router(pool: SqlitePool, tokens: Arc<TokenService>) -> Router {
    todo_router_with(Arc::new(SqliteTodoRepository::new(pool)), tokens)
}

/// Admin todo routes behind the admin gate, intended to be nested under
/// `/admin`.
pub fn admin_router(pool: SqlitePool, tokens: Arc<TokenService>) -> Router {
    admin_router_with(Arc::new(SqliteTodoRepository::new(pool)), tokens)
}

pub fn todo_router_with<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState::new(tokens);
    let state = TodoAppState { repo };

    Router::new()
        .route("/", get(handlers::list_todos::<R>))
        .route("/todo", post(handlers::create_todo::<R>))
        .route(
            "/todo/{id}",
            get(handlers::get_todo::<R>)
                .put(handlers::update_todo::<R>)
                .delete(handlers::delete_todo::<R>),
        )
        .route_layer(from_fn_with_state(gate, require_auth))
        .with_state(state)
}

pub fn admin_router_with<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState::new(tokens);
    let state = TodoAppState { repo };

    Router::new()
        .route("/todo", get(handlers::admin_list_todos::<R>))
        .route("/todo/{id}", delete(handlers::admin_delete_todo::<R>))
        .route_layer(from_fn_with_state(gate, require_admin))
        .with_state(state)
}
