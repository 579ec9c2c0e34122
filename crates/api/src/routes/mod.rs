pub mod health;
pub mod reference_import;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reference
///     POST /{kind}/import         import_reference (multipart `file`)
///     GET  /imports               list_import_runs (?kind=, ?limit=)
///     GET  /imports/{id}          get_import_run
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/reference", reference_import::router())
}
