//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::{self, Method, header};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::AuthConfig;

const DEFAULT_TOKEN_TTL_MINUTES: u64 = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,todos=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todos.db".to_string());

    let connect_options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;

    tracing::info!(database_url = %database_url, "Connected to database");

    // Create tables if absent; no migration system
    api::init_schemas(&pool).await?;

    tracing::info!("Schema initialized");

    // Token configuration
    let token_ttl_minutes = env::var("TOKEN_TTL_MINUTES")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);

    let config = match env::var("JWT_SECRET") {
        Ok(secret) => AuthConfig::new(
            secret.into_bytes(),
            Duration::from_secs(token_ttl_minutes * 60),
        ),
        Err(_) => {
            // Every restart invalidates outstanding tokens in this mode
            tracing::warn!("JWT_SECRET not set, using a random per-process secret");
            AuthConfig {
                token_ttl: Duration::from_secs(token_ttl_minutes * 60),
                ..AuthConfig::with_random_secret()
            }
        }
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = api::build_router(pool, &config)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let addr: SocketAddr = bind_addr.parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
