//! Todo Entity

use chrono::{DateTime, Utc};

/// A stored todo row
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// 1 (lowest) ..= 5 (highest)
    pub priority: i32,
    pub complete: bool,
    /// Immutable after creation
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A todo about to be inserted. The owner id comes from verified claims.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

/// Full replacement of a todo's mutable fields; id and owner are preserved.
#[derive(Debug, Clone)]
pub struct TodoUpdate {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
}
