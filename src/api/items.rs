use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{AppState, DeleteResponse};
use crate::domain::{Item, ItemIn, Page};
use crate::error::AppError;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("item with id: {} not found", id))
}

pub async fn list_items(
    Query(page): Query<Page>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.store.list_items(page).await?;
    Ok(Json(items))
}

pub async fn get_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Item>, AppError> {
    state
        .store
        .get_item(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemIn>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let item = state.store.create_item(&payload).await?;
    tracing::debug!(item_id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ItemIn>,
) -> Result<Json<Item>, AppError> {
    state
        .store
        .update_item(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Succeeds whether or not the item existed.
pub async fn delete_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = state.store.delete_item(id).await?;
    tracing::debug!(item_id = id, removed, "item delete");
    Ok(Json(DeleteResponse {
        message: format!("item with id: {} deleted successfully!", id),
    }))
}
