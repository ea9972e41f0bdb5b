//! Runtime configuration, read from the environment with hardcoded
//! fallbacks.

use std::env;

/// Which record store backs the service. Chosen once at startup; there is
/// no runtime switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    DynamoDb,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`, default 3000).
    pub port: u16,
    /// Origin allow-list (`CORS_ORIGINS`, comma-separated). Empty means
    /// any origin is allowed.
    pub cors_origins: Vec<String>,
    /// Record store selection (`STORE_BACKEND`: "memory" or "dynamodb").
    pub store_backend: StoreBackend,
    /// DynamoDB table (`TABLE_NAME`, default "todo-items").
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let store_backend = match env::var("STORE_BACKEND").as_deref() {
            Ok("dynamodb") => StoreBackend::DynamoDb,
            _ => StoreBackend::Memory,
        };

        let table_name = env::var("TABLE_NAME").unwrap_or_else(|_| "todo-items".to_string());

        Config {
            port,
            cors_origins,
            store_backend,
            table_name,
        }
    }
}
