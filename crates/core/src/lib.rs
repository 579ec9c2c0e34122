//! Domain types and pure logic for the reference-master bulk importer.
//!
//! Nothing in this crate touches the database or the network. Persistence
//! is reached only through the [`reference_import::ReferenceStore`] trait.

pub mod error;
pub mod reference_import;
pub mod types;
