//! Core types and pure logic for the reference-master bulk importer.
//!
//! Five reference tables (bank codes, bank-to-IFSC mappings, NSDL/CDSL
//! depository participants, postal pin codes, state codes) are loaded from
//! uploaded delimited-text files. This module has no DB, no async and no
//! I/O. It provides:
//!
//! - [`ReferenceKind`] naming each import target.
//! - The field tokenizers ([`tokenizer`]).
//! - Per-entity column descriptors and record builders ([`descriptor`]).
//! - The case-insensitive dedup key set ([`dedup`]).
//! - Single-line validation ([`row`]) and the aggregate [`ImportResult`].
//! - The [`ReferenceStore`] persistence seam implemented by the db crate.

pub mod dedup;
pub mod descriptor;
pub mod records;
pub mod result;
pub mod row;
pub mod store;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use dedup::KeySet;
pub use descriptor::{EntityDescriptor, RowFields};
pub use result::{ImportResult, RowError};
pub use row::{process_line, RowOutcome};
pub use store::ReferenceStore;
pub use tokenizer::Tokenizer;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of accepted records persisted per commit.
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

/// Default number of rows parsed between cancellation checks.
pub const DEFAULT_CANCEL_CHECK_ROWS: usize = 500;

/// Maximum length (in characters) of any natural key.
pub const MAX_KEY_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Reference kind
// ---------------------------------------------------------------------------

/// The target collection of one import call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    BankMaster,
    BankMapping,
    NsdlDp,
    CdslDp,
    PinCode,
    State,
}

impl ReferenceKind {
    /// Return the kind name as used in URLs and stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankMaster => "bank_master",
            Self::BankMapping => "bank_mapping",
            Self::NsdlDp => "nsdl_dp",
            Self::CdslDp => "cdsl_dp",
            Self::PinCode => "pin_code",
            Self::State => "state",
        }
    }

    /// Parse a kind name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bank_master" => Some(Self::BankMaster),
            "bank_mapping" => Some(Self::BankMapping),
            "nsdl_dp" => Some(Self::NsdlDp),
            "cdsl_dp" => Some(Self::CdslDp),
            "pin_code" => Some(Self::PinCode),
            "state" => Some(Self::State),
            _ => None,
        }
    }

    /// All valid kind names.
    pub const ALL: &'static [&'static str] = &[
        "bank_master",
        "bank_mapping",
        "nsdl_dp",
        "cdsl_dp",
        "pin_code",
        "state",
    ];
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record provenance
// ---------------------------------------------------------------------------

/// Where a reference record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Import,
    Manual,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Manual => "manual",
        }
    }
}

impl std::fmt::Display for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Import run status
// ---------------------------------------------------------------------------

/// Final status of an import call, as recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportRunStatus {
    Completed,
    Failed,
    Cancelled,
}

impl ImportRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImportRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
