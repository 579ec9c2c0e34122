use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and token are reference-counted handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: refmaster_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cancelled on server shutdown; each import runs on a child token.
    pub shutdown: CancellationToken,
}
