//! Liveness check mounted at the root, outside `/api/v1`.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseStatus,
}

#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub reachable: bool,
    /// Round-trip of `SELECT 1`, absent when the query failed.
    pub latency_ms: Option<u64>,
}

async fn check_database(state: &AppState) -> DatabaseStatus {
    let started = Instant::now();
    match refmaster_db::health_check(&state.pool).await {
        Ok(()) => DatabaseStatus {
            reachable: true,
            latency_ms: Some(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            DatabaseStatus {
                reachable: false,
                latency_ms: None,
            }
        }
    }
}

/// GET /health
///
/// 200 while the database is reachable, 503 otherwise, so load balancers
/// stop routing uploads to an instance that cannot persist them.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = check_database(&state).await;
    let (code, status) = if database.reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
    };
    (code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
