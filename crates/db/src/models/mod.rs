//! Database row structs and DTOs.
//!
//! Reference records themselves are defined in `refmaster_core`; only
//! tables owned by this crate's repositories have models here.

pub mod import_run;
