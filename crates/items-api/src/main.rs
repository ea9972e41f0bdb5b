//! items-api binary entry point.

use std::sync::Arc;

use infrastructure::{DynamoStore, MemoryStore};
use items_api::config::{Config, StoreBackend};
use items_api::{app_with_state, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();

    let state = match config.store_backend {
        StoreBackend::Memory => AppState {
            store: Arc::new(MemoryStore::new()),
        },
        StoreBackend::DynamoDb => AppState {
            store: Arc::new(DynamoStore::new(&config.table_name).await),
        },
    };

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, backend = ?config.store_backend, "server starting");

    let router = app_with_state(state, &config.cors_origins);
    axum::serve(listener, router).await?;

    Ok(())
}
