//! Per-entity file format descriptors.
//!
//! The five import flows share one engine and differ only in the values
//! defined here: header presence, tokenizer, minimum column count, which
//! column holds the natural key, and how the remaining columns map onto
//! record attributes.

use uuid::Uuid;

use super::records::{BankMapping, BankMaster, Depository, DpMaster, PinCodeMaster, StateMaster};
use super::{RecordSource, ReferenceKind, Tokenizer};
use crate::error::CoreError;

/// Builds a record from a tokenized row and its already-trimmed key.
pub type RecordBuilder<R> = fn(&RowFields<'_>, &str) -> Result<R, CoreError>;

/// Column contract and record mapping for one reference file format.
#[derive(Debug)]
pub struct EntityDescriptor<R> {
    pub kind: ReferenceKind,
    /// Human-readable key name used in row error messages.
    pub key_name: &'static str,
    /// 0-based column holding the natural key.
    pub key_column: usize,
    /// Rows with fewer fields are rejected. Extra trailing fields are ignored.
    pub required_columns: usize,
    /// When `true`, the first line of the file is a header and never parsed.
    pub has_header: bool,
    pub tokenizer: Tokenizer,
    pub build: RecordBuilder<R>,
}

/// Read-only view over one tokenized row.
#[derive(Debug, Clone, Copy)]
pub struct RowFields<'a> {
    fields: &'a [String],
}

impl<'a> RowFields<'a> {
    pub fn new(fields: &'a [String]) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The trimmed value at `index`, or `""` when the column is missing.
    pub fn trimmed(&self, index: usize) -> &'a str {
        self.fields.get(index).map(|s| s.trim()).unwrap_or("")
    }

    /// Optional text attribute: trimmed, with empty collapsed to `None`.
    pub fn text(&self, index: usize) -> Option<String> {
        let value = self.trimmed(index);
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Optional integer attribute. Empty or unparsable values are `None`.
    pub fn int(&self, index: usize) -> Option<i32> {
        self.trimmed(index).parse().ok()
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// `bank_code, bank_name, ifsc_prefix` with no header.
pub const BANK_MASTER: EntityDescriptor<BankMaster> = EntityDescriptor {
    kind: ReferenceKind::BankMaster,
    key_name: "Bank code",
    key_column: 0,
    required_columns: 3,
    has_header: false,
    tokenizer: Tokenizer::Plain,
    build: build_bank_master,
};

/// `bank_code, ifsc_code, branch_name[, city, micr_code]` with no header.
pub const BANK_MAPPING: EntityDescriptor<BankMapping> = EntityDescriptor {
    kind: ReferenceKind::BankMapping,
    key_name: "IFSC code",
    key_column: 1,
    required_columns: 3,
    has_header: false,
    tokenizer: Tokenizer::Plain,
    build: build_bank_mapping,
};

/// NSDL participant master: header row, quoted fields, 21 columns.
pub const NSDL_DP: EntityDescriptor<DpMaster> = EntityDescriptor {
    kind: ReferenceKind::NsdlDp,
    key_name: "DP code",
    key_column: 0,
    required_columns: 21,
    has_header: true,
    tokenizer: Tokenizer::Quoted,
    build: build_nsdl_dp,
};

/// CDSL participant master: same layout as NSDL.
pub const CDSL_DP: EntityDescriptor<DpMaster> = EntityDescriptor {
    kind: ReferenceKind::CdslDp,
    key_name: "DP code",
    key_column: 0,
    required_columns: 21,
    has_header: true,
    tokenizer: Tokenizer::Quoted,
    build: build_cdsl_dp,
};

pub const PIN_CODE: EntityDescriptor<PinCodeMaster> = EntityDescriptor {
    kind: ReferenceKind::PinCode,
    key_name: "Pin code",
    key_column: 0,
    required_columns: 6,
    has_header: true,
    tokenizer: Tokenizer::Plain,
    build: build_pin_code,
};

pub const STATE: EntityDescriptor<StateMaster> = EntityDescriptor {
    kind: ReferenceKind::State,
    key_name: "State code",
    key_column: 0,
    required_columns: 10,
    has_header: true,
    tokenizer: Tokenizer::Plain,
    build: build_state,
};

// ---------------------------------------------------------------------------
// Record builders
// ---------------------------------------------------------------------------

fn build_bank_master(row: &RowFields<'_>, key: &str) -> Result<BankMaster, CoreError> {
    Ok(BankMaster {
        id: Uuid::now_v7(),
        bank_code: key.to_string(),
        bank_name: row.text(1),
        ifsc_prefix: row.text(2),
        is_active: true,
        source: RecordSource::Import,
    })
}

fn build_bank_mapping(row: &RowFields<'_>, key: &str) -> Result<BankMapping, CoreError> {
    Ok(BankMapping {
        id: Uuid::now_v7(),
        bank_code: row.text(0),
        ifsc_code: key.to_string(),
        branch_name: row.text(2),
        city: row.text(3),
        micr_code: row.text(4),
        is_active: true,
        source: RecordSource::Import,
    })
}

fn build_nsdl_dp(row: &RowFields<'_>, key: &str) -> Result<DpMaster, CoreError> {
    Ok(build_dp(Depository::Nsdl, row, key))
}

fn build_cdsl_dp(row: &RowFields<'_>, key: &str) -> Result<DpMaster, CoreError> {
    Ok(build_dp(Depository::Cdsl, row, key))
}

fn build_dp(depository: Depository, row: &RowFields<'_>, key: &str) -> DpMaster {
    DpMaster {
        id: Uuid::now_v7(),
        depository,
        dp_code: key.to_string(),
        dp_name: row.text(1),
        sebi_registration_no: row.text(2),
        pan: row.text(3),
        address_line1: row.text(4),
        address_line2: row.text(5),
        address_line3: row.text(6),
        city: row.text(7),
        state: row.text(8),
        pin_code: row.int(9),
        country: row.text(10),
        phone: row.text(11),
        fax: row.text(12),
        email: row.text(13),
        website: row.text(14),
        contact_person: row.text(15),
        compliance_officer: row.text(16),
        dp_status: row.text(17),
        registration_date: row.text(18),
        segment: row.text(19),
        dp_category: row.text(20),
        is_active: true,
        source: RecordSource::Import,
    }
}

fn build_pin_code(row: &RowFields<'_>, key: &str) -> Result<PinCodeMaster, CoreError> {
    Ok(PinCodeMaster {
        id: Uuid::now_v7(),
        pin_code: key.to_string(),
        office_name: row.text(1),
        office_type: row.text(2),
        district: row.text(3),
        state_name: row.text(4),
        state_code: row.int(5),
        is_active: true,
        source: RecordSource::Import,
    })
}

fn build_state(row: &RowFields<'_>, key: &str) -> Result<StateMaster, CoreError> {
    Ok(StateMaster {
        id: Uuid::now_v7(),
        state_code: key.to_string(),
        state_name: row.text(1),
        short_name: row.text(2),
        gst_state_code: row.int(3),
        census_code: row.int(4),
        capital: row.text(5),
        region: row.text(6),
        country_code: row.text(7),
        territory_type: row.text(8),
        remarks: row.text(9),
        is_active: true,
        source: RecordSource::Import,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str, tokenizer: Tokenizer) -> Vec<String> {
        tokenizer.tokenize(line)
    }

    // -- RowFields --

    #[test]
    fn text_trims_and_collapses_empty() {
        let raw = fields(" a ,   ,b", Tokenizer::Plain);
        let row = RowFields::new(&raw);
        assert_eq!(row.text(0).as_deref(), Some("a"));
        assert_eq!(row.text(1), None);
        assert_eq!(row.text(2).as_deref(), Some("b"));
        assert_eq!(row.text(9), None);
    }

    #[test]
    fn int_treats_garbage_as_absent() {
        let raw = fields("12, 34 ,x1,", Tokenizer::Plain);
        let row = RowFields::new(&raw);
        assert_eq!(row.int(0), Some(12));
        assert_eq!(row.int(1), Some(34));
        assert_eq!(row.int(2), None);
        assert_eq!(row.int(3), None);
        assert_eq!(row.int(7), None);
    }

    // -- Builders --

    #[test]
    fn bank_master_maps_code_name_prefix() {
        let raw = fields("ABC,Test Bank,ABCD", Tokenizer::Plain);
        let record = (BANK_MASTER.build)(&RowFields::new(&raw), "ABC").unwrap();
        assert_eq!(record.bank_code, "ABC");
        assert_eq!(record.bank_name.as_deref(), Some("Test Bank"));
        assert_eq!(record.ifsc_prefix.as_deref(), Some("ABCD"));
        assert!(record.is_active);
        assert_eq!(record.source, RecordSource::Import);
    }

    #[test]
    fn bank_mapping_reads_optional_trailing_columns() {
        let raw = fields("HDFC,HDFC0000001,Fort,Mumbai", Tokenizer::Plain);
        let record = (BANK_MAPPING.build)(&RowFields::new(&raw), "HDFC0000001").unwrap();
        assert_eq!(record.bank_code.as_deref(), Some("HDFC"));
        assert_eq!(record.ifsc_code, "HDFC0000001");
        assert_eq!(record.city.as_deref(), Some("Mumbai"));
        assert_eq!(record.micr_code, None);
    }

    #[test]
    fn dp_builders_stamp_depository() {
        let mut raw: Vec<String> = (0..21).map(|i| format!("v{i}")).collect();
        raw[9] = "400001".to_string();
        let row = RowFields::new(&raw);

        let nsdl = (NSDL_DP.build)(&row, "IN300001").unwrap();
        let cdsl = (CDSL_DP.build)(&row, "IN300001").unwrap();
        assert_eq!(nsdl.depository, Depository::Nsdl);
        assert_eq!(cdsl.depository, Depository::Cdsl);
        assert_eq!(nsdl.pin_code, Some(400001));
        assert_eq!(nsdl.dp_name.as_deref(), Some("v1"));
        assert_eq!(nsdl.dp_category.as_deref(), Some("v20"));
    }

    #[test]
    fn state_parses_numeric_codes() {
        let raw = fields("MH,Maharashtra,MH,27,,Mumbai,West,IN,State,", Tokenizer::Plain);
        let record = (STATE.build)(&RowFields::new(&raw), "MH").unwrap();
        assert_eq!(record.gst_state_code, Some(27));
        assert_eq!(record.census_code, None);
        assert_eq!(record.remarks, None);
    }

    #[test]
    fn generated_ids_are_unique() {
        let raw = fields("A,B,C", Tokenizer::Plain);
        let row = RowFields::new(&raw);
        let a = (BANK_MASTER.build)(&row, "A").unwrap();
        let b = (BANK_MASTER.build)(&row, "A").unwrap();
        assert_ne!(a.id, b.id);
    }

    // -- Descriptor table --

    #[test]
    fn descriptor_contracts() {
        assert_eq!(
            (BANK_MASTER.required_columns, BANK_MASTER.has_header, BANK_MASTER.tokenizer),
            (3, false, Tokenizer::Plain)
        );
        assert_eq!(
            (BANK_MAPPING.required_columns, BANK_MAPPING.has_header, BANK_MAPPING.key_column),
            (3, false, 1)
        );
        assert_eq!(
            (NSDL_DP.required_columns, NSDL_DP.has_header, NSDL_DP.tokenizer),
            (21, true, Tokenizer::Quoted)
        );
        assert_eq!(CDSL_DP.kind, ReferenceKind::CdslDp);
        assert_eq!((PIN_CODE.required_columns, PIN_CODE.has_header), (6, true));
        assert_eq!((STATE.required_columns, STATE.has_header), (10, true));
    }
}
