//! Repository Trait

use crate::domain::entity::todo::{NewTodo, Todo, TodoUpdate};
use crate::error::TodoResult;

/// Persistence operations for todos.
///
/// The `*_for_owner` operations are ownership-scoped: they only ever see
/// rows whose `owner_id` matches, so a wrong-owner call behaves exactly
/// like an absent row. `list_all` and `delete_any` are the admin surface.
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    async fn list_for_owner(&self, owner_id: i64) -> TodoResult<Vec<Todo>>;

    async fn find_for_owner(&self, owner_id: i64, id: i64) -> TodoResult<Option<Todo>>;

    /// Insert and return the new row id.
    async fn create(&self, todo: &NewTodo) -> TodoResult<i64>;

    /// Returns false when no row matched the (owner, id) pair.
    async fn update_for_owner(
        &self,
        owner_id: i64,
        id: i64,
        update: &TodoUpdate,
    ) -> TodoResult<bool>;

    /// Returns false when no row matched the (owner, id) pair.
    async fn delete_for_owner(&self, owner_id: i64, id: i64) -> TodoResult<bool>;

    async fn list_all(&self) -> TodoResult<Vec<Todo>>;

    /// Returns false when no row matched the id.
    async fn delete_any(&self, id: i64) -> TodoResult<bool>;
}
