//! Machine-readable API description served at `/api-docs`.
//!
//! Purely descriptive; has no effect on request handling.

use axum::Json;
use domain::{Todo, TodoDraft};
use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo items API",
        description = "Minimal CRUD API over a single todo resource."
    ),
    paths(
        handlers::health,
        handlers::list_items,
        handlers::create_item,
        handlers::replace_item,
        handlers::patch_item,
        handlers::delete_item,
    ),
    components(schemas(Todo, TodoDraft))
)]
pub struct ApiDoc;

pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
