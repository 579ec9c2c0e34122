//! Streaming bulk loader for reference-master files.
//!
//! - [`ReferenceImporter`] reads an upload line by line, validates and
//!   deduplicates each row, and collects accepted records.
//! - [`commit_in_chunks`] persists those records in fixed-size chunks,
//!   resetting the store's bookkeeping between chunks.
//!
//! Both are generic over [`ReferenceStore`](refmaster_core::reference_import::ReferenceStore),
//! so the same engine drives all six reference kinds.

pub mod committer;
pub mod config;
pub mod error;
pub mod importer;

pub use committer::commit_in_chunks;
pub use config::ImportConfig;
pub use error::ImportError;
pub use importer::ReferenceImporter;

#[cfg(test)]
mod testing;
