//! Models for the reference import audit trail.

use refmaster_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reference_import_runs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReferenceImportRun {
    pub id: DbId,
    pub kind: String,
    pub file_name: Option<String>,
    pub status: String,
    pub created: i32,
    pub skipped: i32,
    pub error_count: i32,
    /// `[{ "row": n, "reason": "..." }, ...]` in input order.
    pub errors: serde_json::Value,
    pub failure_message: Option<String>,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a finished import call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReferenceImportRun {
    pub kind: String,
    pub file_name: Option<String>,
    pub status: String,
    pub created: i32,
    pub skipped: i32,
    pub error_count: i32,
    pub errors: serde_json::Value,
    pub failure_message: Option<String>,
    pub started_at: Timestamp,
}
