use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub pool: pathfinder_db::DbPool,
    pub config: Arc<ServerConfig>,
}
