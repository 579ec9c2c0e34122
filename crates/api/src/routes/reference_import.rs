//! Route definitions for reference-master imports.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reference_import;
use crate::state::AppState;

/// Reference import routes mounted at `/reference`.
///
/// ```text
/// POST /{kind}/import    -> import_reference
/// GET  /imports          -> list_import_runs
/// GET  /imports/{id}     -> get_import_run
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{kind}/import", post(reference_import::import_reference))
        .route("/imports", get(reference_import::list_import_runs))
        .route("/imports/{id}", get(reference_import::get_import_run))
}
