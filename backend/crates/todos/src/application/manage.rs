//! Todo Management Use Case
//!
//! Owner-scoped CRUD plus the admin operations. The owner id parameter
//! always comes from verified claims upstream; nothing here trusts a
//! client-supplied owner.

use std::sync::Arc;

use crate::domain::entity::todo::{NewTodo, Todo, TodoUpdate};
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Todo management use case
pub struct TodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> TodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List the caller's own todos.
    pub async fn list(&self, owner_id: i64) -> TodoResult<Vec<Todo>> {
        self.repo.list_for_owner(owner_id).await
    }

    /// Fetch one of the caller's own todos. A wrong-owner id reads as
    /// absent.
    pub async fn get(&self, owner_id: i64, id: i64) -> TodoResult<Todo> {
        self.repo
            .find_for_owner(owner_id, id)
            .await?
            .ok_or(TodoError::NotFound)
    }

    /// Create a todo owned by the caller.
    pub async fn create(&self, todo: NewTodo) -> TodoResult<i64> {
        let id = self.repo.create(&todo).await?;

        tracing::info!(todo_id = id, owner_id = todo.owner_id, "Todo created");

        Ok(id)
    }

    /// Replace the mutable fields of one of the caller's own todos.
    pub async fn update(&self, owner_id: i64, id: i64, update: TodoUpdate) -> TodoResult<()> {
        if !self.repo.update_for_owner(owner_id, id, &update).await? {
            return Err(TodoError::NotFound);
        }

        Ok(())
    }

    /// Delete one of the caller's own todos.
    pub async fn delete(&self, owner_id: i64, id: i64) -> TodoResult<()> {
        if !self.repo.delete_for_owner(owner_id, id).await? {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = id, owner_id, "Todo deleted");

        Ok(())
    }

    /// Admin: list every todo regardless of owner.
    pub async fn list_all(&self) -> TodoResult<Vec<Todo>> {
        self.repo.list_all().await
    }

    /// Admin: delete any todo by id.
    pub async fn delete_any(&self, id: i64) -> TodoResult<()> {
        if !self.repo.delete_any(id).await? {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = id, "Todo deleted by admin");

        Ok(())
    }
}
