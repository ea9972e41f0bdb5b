//! Resource handlers: each maps one verb+path to exactly one store call.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domain::{Todo, TodoDraft, UpdateMode};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "Every stored todo", body = [Todo]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let items = state.store.find_all().await?;
    tracing::info!(count = items.len(), "listed items");
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/items",
    request_body = TodoDraft,
    responses(
        (status = 201, description = "Created todo; the id is server-assigned", body = Todo),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(draft): Json<TodoDraft>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.store.create(draft).await?;
    tracing::info!(id = todo.id, "created item");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = TodoDraft,
    responses(
        (status = 200, description = "Replaced todo; omitted fields are discarded", body = Todo),
        (status = 404, description = "No todo with that id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn replace_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.update(id, draft, UpdateMode::Replace).await?;
    tracing::info!(id, "replaced item");
    Ok(Json(todo))
}

#[utoipa::path(
    patch,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = TodoDraft,
    responses(
        (status = 200, description = "Updated todo; omitted fields are preserved", body = Todo),
        (status = 404, description = "No todo with that id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn patch_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.update(id, draft, UpdateMode::Merge).await?;
    tracing::info!(id, "patched item");
    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Todo removed"),
        (status = 404, description = "No todo with that id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.store.delete(id).await?;
    tracing::info!(id, "deleted item");
    Ok(Json(serde_json::json!({ "message": "Item deleted" })))
}
