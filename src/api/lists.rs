use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{AppState, DeleteResponse};
use crate::domain::{Page, TodoList, TodoListIn};
use crate::error::AppError;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("list with id: {} not found", id))
}

pub async fn list_lists(
    Query(page): Query<Page>,
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoList>>, AppError> {
    let lists = state.store.list_lists(page).await?;
    Ok(Json(lists))
}

pub async fn get_list(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TodoList>, AppError> {
    state
        .store
        .get_list(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn create_list(
    State(state): State<AppState>,
    Json(payload): Json<TodoListIn>,
) -> Result<(StatusCode, Json<TodoList>), AppError> {
    let list = state.store.create_list(&payload).await?;
    tracing::debug!(list_id = list.id, "list created");
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn update_list(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<TodoListIn>,
) -> Result<Json<TodoList>, AppError> {
    state
        .store
        .update_list(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Items that reference the list keep their `listId`.
pub async fn delete_list(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = state.store.delete_list(id).await?;
    tracing::debug!(list_id = id, removed, "list delete");
    Ok(Json(DeleteResponse {
        message: format!("list with id: {} deleted successfully!", id),
    }))
}
