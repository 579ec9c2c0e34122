use refmaster_core::reference_import::{DEFAULT_CANCEL_CHECK_ROWS, DEFAULT_CHUNK_SIZE};

/// Tuning knobs for one import call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    /// Records persisted per insert/commit round.
    pub chunk_size: usize,
    /// Rows parsed between cancellation checks.
    pub cancel_check_rows: usize,
}

impl ImportConfig {
    /// Build a config, clamping both values to at least 1.
    pub fn new(chunk_size: usize, cancel_check_rows: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            cancel_check_rows: cancel_check_rows.max(1),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CANCEL_CHECK_ROWS)
    }
}
