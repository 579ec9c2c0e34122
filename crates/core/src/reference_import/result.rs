//! Aggregate outcome of one import call.

use serde::{Deserialize, Serialize};

/// A rejected input row. `row` is 1-based and counts from the first raw
/// line, header included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub reason: String,
}

impl RowError {
    pub fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

/// Counts and row errors for one completed import.
///
/// `created + skipped + errors.len()` never exceeds the number of
/// non-blank data rows. Errors are in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub created: usize,
    pub skipped: usize,
    pub errors: Vec<RowError>,
}

impl ImportResult {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of data rows that reached a decision.
    pub fn rows_processed(&self) -> usize {
        self.created + self.skipped + self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_processed_sums_all_outcomes() {
        let result = ImportResult {
            created: 3,
            skipped: 2,
            errors: vec![RowError::new(4, "Bank code is empty")],
        };
        assert_eq!(result.rows_processed(), 6);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn serializes_with_row_and_reason() {
        let result = ImportResult {
            created: 1,
            skipped: 0,
            errors: vec![RowError::new(2, "Expected 3 columns, found 1")],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["created"], 1);
        assert_eq!(json["errors"][0]["row"], 2);
        assert_eq!(json["errors"][0]["reason"], "Expected 3 columns, found 1");
    }
}
