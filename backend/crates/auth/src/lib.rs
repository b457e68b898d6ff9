//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - User registration and login with username + password
//! - Stateless bearer tokens (JWT, HS256) carrying identity and role claims
//! - Role-based access (User, Admin)
//! - Self-service routes: profile, password change, phone number change
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified in constant time
//! - Tokens are signed with a process-wide secret; rotating the secret
//!   invalidates every outstanding token (no key versioning)
//! - All token-verification failures answer with one generic 401 detail;
//!   the precise failure is kept internally for logging and tests

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{Claims, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::router::{auth_router, user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::user_role::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
