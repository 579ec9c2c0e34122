//! Validation and mapping of a single input line.

use super::descriptor::{EntityDescriptor, RowFields};
use super::{KeySet, RowError, MAX_KEY_LENGTH};

/// Decision taken for one raw input line.
#[derive(Debug)]
pub enum RowOutcome<R> {
    /// Empty after trimming. Counted nowhere.
    Blank,
    /// Valid and new. The key has been registered in the key set.
    Accepted(R),
    /// Valid but the key was already persisted or seen earlier in the file.
    Skipped,
    Rejected(RowError),
}

/// Validate `line` against `descriptor` and decide its outcome.
///
/// Accepting a row registers its key in `keys`, so a later row with the
/// same key (in any letter case) is skipped.
pub fn process_line<R>(
    descriptor: &EntityDescriptor<R>,
    keys: &mut KeySet,
    row: usize,
    line: &str,
) -> RowOutcome<R> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if line.is_empty() {
        return RowOutcome::Blank;
    }

    let raw = descriptor.tokenizer.tokenize(line);
    if raw.len() < descriptor.required_columns {
        return RowOutcome::Rejected(RowError::new(
            row,
            format!(
                "Expected {} columns, found {}",
                descriptor.required_columns,
                raw.len()
            ),
        ));
    }

    let fields = RowFields::new(&raw);
    let key = fields.trimmed(descriptor.key_column);
    if key.is_empty() {
        return RowOutcome::Rejected(RowError::new(
            row,
            format!("{} is empty", descriptor.key_name),
        ));
    }
    if key.chars().count() > MAX_KEY_LENGTH {
        return RowOutcome::Rejected(RowError::new(
            row,
            format!("{} exceeds {MAX_KEY_LENGTH} characters", descriptor.key_name),
        ));
    }

    if keys.contains(key) {
        return RowOutcome::Skipped;
    }

    match (descriptor.build)(&fields, key) {
        Ok(record) => {
            keys.insert(key);
            RowOutcome::Accepted(record)
        }
        Err(e) => RowOutcome::Rejected(RowError::new(row, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::reference_import::descriptor::{BANK_MASTER, NSDL_DP, PIN_CODE};
    use crate::reference_import::records::BankMaster;
    use crate::reference_import::{ReferenceKind, Tokenizer};

    fn accepted<R>(outcome: RowOutcome<R>) -> R {
        match outcome {
            RowOutcome::Accepted(r) => r,
            other => panic!("expected Accepted, got {}", label(&other)),
        }
    }

    fn label<R>(outcome: &RowOutcome<R>) -> &'static str {
        match outcome {
            RowOutcome::Blank => "Blank",
            RowOutcome::Accepted(_) => "Accepted",
            RowOutcome::Skipped => "Skipped",
            RowOutcome::Rejected(_) => "Rejected",
        }
    }

    fn rejected<R>(outcome: RowOutcome<R>) -> RowError {
        match outcome {
            RowOutcome::Rejected(e) => e,
            other => panic!("expected Rejected, got {}", label(&other)),
        }
    }

    #[test]
    fn blank_and_whitespace_lines_are_ignored() {
        let mut keys = KeySet::new();
        for line in ["", "   ", "\r", " \t\r"] {
            let outcome = process_line(&BANK_MASTER, &mut keys, 1, line);
            assert!(matches!(outcome, RowOutcome::Blank), "line: {line:?}");
        }
        assert!(keys.is_empty());
    }

    #[test]
    fn valid_row_is_accepted_and_key_registered() {
        let mut keys = KeySet::new();
        let record = accepted(process_line(&BANK_MASTER, &mut keys, 1, "ABC,Test Bank,ABCD\r"));
        assert_eq!(record.bank_code, "ABC");
        assert_eq!(record.ifsc_prefix.as_deref(), Some("ABCD"));
        assert!(keys.contains("abc"));
    }

    #[test]
    fn too_few_columns_is_rejected_with_counts() {
        let mut keys = KeySet::new();
        let err = rejected(process_line(&BANK_MASTER, &mut keys, 7, "ABC,Test Bank"));
        assert_eq!(err, RowError::new(7, "Expected 3 columns, found 2"));
    }

    #[test]
    fn extra_columns_are_accepted() {
        let mut keys = KeySet::new();
        accepted(process_line(&BANK_MASTER, &mut keys, 1, "ABC,Test Bank,ABCD,extra,more"));
    }

    #[test]
    fn empty_key_is_rejected_by_name() {
        let mut keys = KeySet::new();
        let err = rejected(process_line(&PIN_CODE, &mut keys, 3, "  ,GPO,HO,Pune,MH,27"));
        assert_eq!(err.reason, "Pin code is empty");
        assert_eq!(err.row, 3);
    }

    #[test]
    fn overlong_key_is_rejected() {
        let mut keys = KeySet::new();
        let line = format!("{},Name,Prefix", "K".repeat(MAX_KEY_LENGTH + 1));
        let err = rejected(process_line(&BANK_MASTER, &mut keys, 1, &line));
        assert_eq!(err.reason, "Bank code exceeds 64 characters");
    }

    #[test]
    fn existing_key_is_skipped_case_insensitively() {
        let mut keys = KeySet::seed(["abc"]);
        let outcome = process_line(&BANK_MASTER, &mut keys, 1, "ABC,Test Bank,ABCD");
        assert!(matches!(outcome, RowOutcome::Skipped));
    }

    #[test]
    fn second_occurrence_in_file_is_skipped() {
        let mut keys = KeySet::new();
        accepted(process_line(&BANK_MASTER, &mut keys, 1, "ABC,First,P1"));
        let outcome = process_line(&BANK_MASTER, &mut keys, 2, "abc,Second,P2");
        assert!(matches!(outcome, RowOutcome::Skipped));
    }

    #[test]
    fn quoted_dp_row_keeps_commas_in_address() {
        let mut cols: Vec<String> = (0..21).map(|i| format!("c{i}")).collect();
        cols[0] = "IN300002".to_string();
        cols[4] = "\"Plot 5, MIDC\"".to_string();
        let line = cols.join(",");

        let mut keys = KeySet::new();
        let record = accepted(process_line(&NSDL_DP, &mut keys, 2, &line));
        assert_eq!(record.address_line1.as_deref(), Some("Plot 5, MIDC"));
        assert_eq!(record.dp_code, "IN300002");
    }

    #[test]
    fn leading_byte_order_mark_is_stripped() {
        let mut keys = KeySet::new();
        let record = accepted(process_line(&BANK_MASTER, &mut keys, 1, "\u{feff}ABC,Bank,AB"));
        assert_eq!(record.bank_code, "ABC");
    }

    #[test]
    fn builder_failure_becomes_row_error_and_key_is_not_registered() {
        fn failing(_: &RowFields<'_>, _: &str) -> Result<BankMaster, CoreError> {
            Err(CoreError::Validation("bad row".to_string()))
        }
        let descriptor = EntityDescriptor {
            kind: ReferenceKind::BankMaster,
            key_name: "Bank code",
            key_column: 0,
            required_columns: 1,
            has_header: false,
            tokenizer: Tokenizer::Plain,
            build: failing,
        };

        let mut keys = KeySet::new();
        let err = rejected(process_line(&descriptor, &mut keys, 5, "ABC"));
        assert_eq!(err.row, 5);
        assert_eq!(err.reason, "Validation failed: bad row");
        assert!(!keys.contains("ABC"));
    }
}
