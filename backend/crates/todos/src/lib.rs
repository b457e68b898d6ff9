//! Todos Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Every route sits behind the bearer gate; the owner id always comes
//!   from the verified claims, never from the request body
//! - Owner-scoped queries: a caller probing another user's todo by id
//!   gets 404, never the row
//! - Admin routes (`list_all`, `delete_any`) additionally require the
//!   admin role claim

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TodoError, TodoResult};
pub use infra::sqlite::SqliteTodoRepository;
pub use presentation::router::{admin_router, todo_router};

pub mod models {
    pub use crate::domain::entity::todo::*;
    pub use crate::presentation::dto::*;
}
