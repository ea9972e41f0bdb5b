//! HTTP surface for the todo items service.
//!
//! The router wires each verb+path to a single [`TodoStore`] call; the
//! store implementation is injected through [`AppState`], so tests run
//! against the in-memory store without a socket.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, put};
use axum::Router;
use infrastructure::{MemoryStore, TodoStore};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }
}

/// Router backed by an in-memory store and a permissive CORS policy.
pub fn app() -> Router {
    app_with_state(AppState::in_memory(), &[])
}

/// Router for externally supplied state and origin allow-list.
pub fn app_with_state(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:id",
            put(handlers::replace_item)
                .patch(handlers::patch_item)
                .delete(handlers::delete_item),
        )
        .route("/api-docs", get(docs::api_docs))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Permissive when no origins are configured, an explicit allow-list
/// otherwise. Methods and headers stay unrestricted in both cases.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
