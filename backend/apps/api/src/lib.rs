//! API Application Wiring
//!
//! Composes the auth and todos crates into one router. Kept as a library
//! so the integration tests can drive the exact router the binary serves.

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use auth::{AuthConfig, TokenService};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Create the application tables. Idempotent; runs at every startup.
pub async fn init_schemas(pool: &SqlitePool) -> anyhow::Result<()> {
    auth::infra::sqlite::init_schema(pool).await?;
    todos::infra::sqlite::init_schema(pool).await?;

    Ok(())
}

/// Build the full application router:
/// - `/auth` - registration and login (public)
/// - `/todos` - owner-scoped todo CRUD (bearer)
/// - `/admin` - admin todo surface (bearer + admin role)
/// - `/user` - self-service profile routes (bearer)
pub fn build_router(pool: SqlitePool, config: &AuthConfig) -> Router {
    let tokens = Arc::new(TokenService::new(config));

    Router::new()
        .nest("/auth", auth::auth_router(pool.clone(), tokens.clone()))
        .nest("/todos", todos::todo_router(pool.clone(), tokens.clone()))
        .nest("/admin", todos::admin_router(pool.clone(), tokens.clone()))
        .nest("/user", auth::user_router(pool, tokens))
}
