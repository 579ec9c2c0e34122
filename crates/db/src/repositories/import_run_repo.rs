//! Repository for the `reference_import_runs` audit table.

use refmaster_core::types::DbId;
use sqlx::PgPool;

use crate::models::import_run::{CreateReferenceImportRun, ReferenceImportRun};

/// Column list for `reference_import_runs` queries.
const COLUMNS: &str = "id, kind, file_name, status, created, skipped, error_count, errors, \
     failure_message, started_at, finished_at, created_at, updated_at";

/// Records and lists reference import runs.
pub struct ReferenceImportRunRepo;

impl ReferenceImportRunRepo {
    /// Insert a finished run, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReferenceImportRun,
    ) -> Result<ReferenceImportRun, sqlx::Error> {
        let sql = format!(
            "INSERT INTO reference_import_runs \
                (kind, file_name, status, created, skipped, error_count, errors, \
                 failure_message, started_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReferenceImportRun>(&sql)
            .bind(&input.kind)
            .bind(&input.file_name)
            .bind(&input.status)
            .bind(input.created)
            .bind(input.skipped)
            .bind(input.error_count)
            .bind(&input.errors)
            .bind(&input.failure_message)
            .bind(input.started_at)
            .fetch_one(pool)
            .await
    }

    /// Find a run by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ReferenceImportRun>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM reference_import_runs WHERE id = $1");
        sqlx::query_as::<_, ReferenceImportRun>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent runs, newest first, optionally filtered by kind.
    pub async fn list(
        pool: &PgPool,
        kind: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ReferenceImportRun>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM reference_import_runs \
             WHERE ($1::TEXT IS NULL OR kind = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, ReferenceImportRun>(&sql)
            .bind(kind)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
