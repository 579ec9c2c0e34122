//! Handlers for reference-master bulk import and its audit trail.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use futures::TryStreamExt;
use refmaster_core::error::CoreError;
use refmaster_core::reference_import::descriptor::{
    BANK_MAPPING, BANK_MASTER, CDSL_DP, NSDL_DP, PIN_CODE, STATE,
};
use refmaster_core::reference_import::records::Depository;
use refmaster_core::reference_import::{
    EntityDescriptor, ImportResult, ImportRunStatus, ReferenceKind, ReferenceStore,
};
use refmaster_core::types::DbId;
use refmaster_db::models::import_run::{CreateReferenceImportRun, ReferenceImportRun};
use refmaster_db::reference_tables::{
    dp_store, BankMappingTable, BankMasterTable, PinCodeTable, StateTable,
};
use refmaster_db::repositories::ReferenceImportRunRepo;
use refmaster_db::PgReferenceStore;
use refmaster_pipeline::{ImportConfig, ImportError, ReferenceImporter};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// Default and maximum page size for the run listing.
const DEFAULT_LIST_LIMIT: i64 = 100;
const MAX_LIST_LIMIT: i64 = 500;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Result of one import call. `run_id` is absent if the audit row could not
/// be written.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub run_id: Option<DbId>,
    #[serde(flatten)]
    pub result: ImportResult,
}

/// Query parameters for `GET /reference/imports`.
#[derive(Debug, Deserialize)]
pub struct ListImportRunsParams {
    pub kind: Option<String>,
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_kind(kind: &str) -> AppResult<ReferenceKind> {
    ReferenceKind::from_str(kind).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "ReferenceKind",
            id: kind.to_string(),
        })
    })
}

async fn run_import<R, S, Rd>(
    descriptor: &EntityDescriptor<R>,
    store: S,
    config: ImportConfig,
    cancel: CancellationToken,
    reader: Rd,
) -> Result<ImportResult, ImportError>
where
    R: Send + Sync,
    S: ReferenceStore<R>,
    Rd: AsyncRead + Unpin + Send,
{
    ReferenceImporter::new(descriptor, store, config)
        .with_cancellation(cancel)
        .import(reader)
        .await
}

/// Pick the descriptor and store for `kind` and run the import.
async fn dispatch<Rd>(
    state: &AppState,
    kind: ReferenceKind,
    cancel: CancellationToken,
    reader: Rd,
) -> Result<ImportResult, ImportError>
where
    Rd: AsyncRead + Unpin + Send,
{
    let pool = state.pool.clone();
    let config = state.config.import_config();

    match kind {
        ReferenceKind::BankMaster => {
            let store = PgReferenceStore::<BankMasterTable>::new(pool);
            run_import(&BANK_MASTER, store, config, cancel, reader).await
        }
        ReferenceKind::BankMapping => {
            let store = PgReferenceStore::<BankMappingTable>::new(pool);
            run_import(&BANK_MAPPING, store, config, cancel, reader).await
        }
        ReferenceKind::NsdlDp => {
            let store = dp_store(pool, Depository::Nsdl);
            run_import(&NSDL_DP, store, config, cancel, reader).await
        }
        ReferenceKind::CdslDp => {
            let store = dp_store(pool, Depository::Cdsl);
            run_import(&CDSL_DP, store, config, cancel, reader).await
        }
        ReferenceKind::PinCode => {
            let store = PgReferenceStore::<PinCodeTable>::new(pool);
            run_import(&PIN_CODE, store, config, cancel, reader).await
        }
        ReferenceKind::State => {
            let store = PgReferenceStore::<StateTable>::new(pool);
            run_import(&STATE, store, config, cancel, reader).await
        }
    }
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Build the audit row for a finished call. A failed or cancelled call
/// records the chunks that were already durable as `created`.
fn audit_entry(
    kind: ReferenceKind,
    file_name: Option<String>,
    started_at: chrono::DateTime<chrono::Utc>,
    outcome: &Result<ImportResult, ImportError>,
) -> CreateReferenceImportRun {
    let (status, result, failure_message) = match outcome {
        Ok(result) => (ImportRunStatus::Completed, Some(result), None),
        Err(err @ ImportError::Cancelled { .. }) => {
            (ImportRunStatus::Cancelled, None, Some(err.to_string()))
        }
        Err(err) => (ImportRunStatus::Failed, None, Some(err.to_string())),
    };

    let (created, skipped, errors) = match result {
        Some(r) => (
            count(r.created),
            count(r.skipped),
            serde_json::to_value(&r.errors).unwrap_or_else(|_| serde_json::json!([])),
        ),
        None => {
            let committed = outcome.as_ref().err().map(ImportError::committed).unwrap_or(0);
            (count(committed), 0, serde_json::json!([]))
        }
    };

    CreateReferenceImportRun {
        kind: kind.as_str().to_string(),
        file_name,
        status: status.as_str().to_string(),
        created,
        skipped,
        error_count: result.map(|r| count(r.error_count())).unwrap_or(0),
        errors,
        failure_message,
        started_at,
    }
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// POST /reference/{kind}/import
///
/// Stream the multipart `file` field through the importer for `kind`.
/// Row-level problems are reported in the response body; the call itself
/// only fails on unreadable input, persistence errors, or shutdown.
pub async fn import_reference(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<ImportResponse>>)> {
    let kind = parse_kind(&kind)?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        tracing::info!(%kind, file_name = ?file_name, "Reference import requested");

        let reader = StreamReader::new(Box::pin(field.map_err(std::io::Error::other)));
        let started_at = chrono::Utc::now();
        let outcome = dispatch(&state, kind, state.shutdown.child_token(), reader).await;
        upload = Some((file_name, started_at, outcome));
        break;
    }

    let Some((file_name, started_at, outcome)) = upload else {
        return Err(AppError::BadRequest(format!(
            "Missing multipart field '{FILE_FIELD}'"
        )));
    };

    let entry = audit_entry(kind, file_name, started_at, &outcome);
    let run_id = match ReferenceImportRunRepo::create(&state.pool, &entry).await {
        Ok(run) => Some(run.id),
        Err(e) => {
            tracing::error!(%kind, error = %e, "Failed to record reference import run");
            None
        }
    };

    let result = outcome?;
    tracing::info!(
        %kind,
        run_id = ?run_id,
        created = result.created,
        skipped = result.skipped,
        errors = result.error_count(),
        "Reference import finished",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ImportResponse { run_id, result },
        }),
    ))
}

// ---------------------------------------------------------------------------
// Audit trail
// ---------------------------------------------------------------------------

/// GET /reference/imports?kind=&limit=
///
/// Most recent import runs, newest first.
pub async fn list_import_runs(
    State(state): State<AppState>,
    Query(params): Query<ListImportRunsParams>,
) -> AppResult<Json<DataResponse<Vec<ReferenceImportRun>>>> {
    let kind = match params.kind.as_deref() {
        Some(k) => Some(
            ReferenceKind::from_str(k)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown reference kind '{k}'")))?,
        ),
        None => None,
    };
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let runs =
        ReferenceImportRunRepo::list(&state.pool, kind.map(|k| k.as_str()), limit).await?;
    Ok(Json(DataResponse { data: runs }))
}

/// GET /reference/imports/{id}
pub async fn get_import_run(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ReferenceImportRun>>> {
    let run = ReferenceImportRunRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "ReferenceImportRun",
                id: id.to_string(),
            })
        })?;
    Ok(Json(DataResponse { data: run }))
}
