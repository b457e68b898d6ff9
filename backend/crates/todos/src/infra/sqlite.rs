//! SQLite Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entity::todo::{NewTodo, Todo, TodoUpdate};
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Idempotent schema creation for the todos table.
///
/// `owner_id` references `users(id)`; the foreign key is the only place
/// owner existence is checked, so `PRAGMA foreign_keys` must be on for
/// the connection.
pub async fn init_schema(pool: &SqlitePool) -> TodoResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            priority INTEGER NOT NULL,
            complete INTEGER NOT NULL DEFAULT 0,
            owner_id INTEGER NOT NULL REFERENCES users(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// SQLite-backed todo repository
#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TodoRepository for SqliteTodoRepository {
    async fn list_for_owner(&self, owner_id: i64) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, priority, complete, owner_id,
                   created_at, updated_at
            FROM todos
            WHERE owner_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn find_for_owner(&self, owner_id: i64, id: i64) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, priority, complete, owner_id,
                   created_at, updated_at
            FROM todos
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    async fn create(&self, todo: &NewTodo) -> TodoResult<i64> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO todos (
                title, description, priority, complete, owner_id,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.priority)
        .bind(todo.complete)
        .bind(todo.owner_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_for_owner(
        &self,
        owner_id: i64,
        id: i64,
        update: &TodoUpdate,
    ) -> TodoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = ?, description = ?, priority = ?, complete = ?,
                updated_at = ?
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.priority)
        .bind(update.complete)
        .bind(Utc::now())
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_owner(&self, owner_id: i64, id: i64) -> TodoResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, priority, complete, owner_id,
                   created_at, updated_at
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn delete_any(&self, id: i64) -> TodoResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Row mapper for the todos table
#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: String,
    priority: i32,
    complete: bool,
    owner_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            id: self.id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            complete: self.complete,
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
