use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the pool is internally reference-counted and
/// the config sits behind an `Arc`. Injecting the pool here (rather than a
/// module-level singleton) is what lets integration tests run against an
/// isolated database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: scout_db::DbPool,
    /// Server configuration (bind address, CORS, JWT settings).
    pub config: Arc<ServerConfig>,
}
