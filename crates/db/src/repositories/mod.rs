//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod import_run_repo;

pub use import_run_repo::ReferenceImportRunRepo;
