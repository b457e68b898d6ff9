//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::Claims;

use crate::application::manage::TodoUseCase;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;
use crate::presentation::dto::{TodoRequest, TodoResponse};

/// Shared state for todo handlers
#[derive(Clone)]
pub struct TodoAppState<R>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Owner-scoped routes (behind require_auth)
// ============================================================================

/// GET /todos/
pub async fn list_todos<R>(
    State(state): State<TodoAppState<R>>,
    Extension(claims): Extension<Claims>,
) -> TodoResult<Json<Vec<TodoResponse>>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let todos = TodoUseCase::new(state.repo.clone())
        .list(claims.user_id)
        .await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// GET /todos/todo/{id}
pub async fn get_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let todo = TodoUseCase::new(state.repo.clone())
        .get(claims.user_id, id)
        .await?;

    Ok(Json(todo.into()))
}

/// POST /todos/todo
pub async fn create_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<TodoRequest>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    TodoUseCase::new(state.repo.clone())
        .create(req.into_new(claims.user_id))
        .await?;

    Ok(StatusCode::CREATED)
}

/// PUT /todos/todo/{id}
pub async fn update_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(req): Json<TodoRequest>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    TodoUseCase::new(state.repo.clone())
        .update(claims.user_id, id, req.into_update())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todos/todo/{id}
pub async fn delete_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    TodoUseCase::new(state.repo.clone())
        .delete(claims.user_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin routes (behind require_admin)
// ============================================================================

/// GET /admin/todo
pub async fn admin_list_todos<R>(
    State(state): State<TodoAppState<R>>,
) -> TodoResult<Json<Vec<TodoResponse>>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let todos = TodoUseCase::new(state.repo.clone()).list_all().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// DELETE /admin/todo/{id}
pub async fn admin_delete_todo<R>(
    State(state): State<TodoAppState<R>>,
    Path(id): Path<i64>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    TodoUseCase::new(state.repo.clone()).delete_any(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
