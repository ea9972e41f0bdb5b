use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use infrastructure::StoreError;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
///
/// Only two kinds exist: a missing update/delete target and everything
/// else. The underlying cause of a store failure is logged, never returned
/// to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("item not found")]
    NotFound,

    #[error("store failure: {0}")]
    Store(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Backend(cause) => ApiError::Store(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Item not found" })),
            )
                .into_response(),
            ApiError::Store(cause) => {
                tracing::error!(error = %cause, "request failed on store call");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Something went wrong" })),
                )
                    .into_response()
            }
        }
    }
}
