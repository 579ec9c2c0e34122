//! [`ReferenceTable`] bindings for every reference record type.

use refmaster_core::reference_import::records::{
    BankMapping, BankMaster, Depository, DpMaster, PinCodeMaster, StateMaster,
};
use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres};

use crate::reference_store::{PgReferenceStore, ReferenceTable};

pub struct BankMasterTable;

impl ReferenceTable for BankMasterTable {
    type Record = BankMaster;

    const TABLE: &'static str = "bank_masters";
    const KEY_COLUMN: &'static str = "bank_code";
    const COLUMNS: &'static [&'static str] =
        &["id", "bank_code", "bank_name", "ifsc_prefix", "is_active", "source"];

    fn push_record(row: &mut Separated<'_, '_, Postgres, &'static str>, r: &BankMaster) {
        row.push_bind(r.id)
            .push_bind(r.bank_code.clone())
            .push_bind(r.bank_name.clone())
            .push_bind(r.ifsc_prefix.clone())
            .push_bind(r.is_active)
            .push_bind(r.source.as_str());
    }
}

pub struct BankMappingTable;

impl ReferenceTable for BankMappingTable {
    type Record = BankMapping;

    const TABLE: &'static str = "bank_mappings";
    const KEY_COLUMN: &'static str = "ifsc_code";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "bank_code",
        "ifsc_code",
        "branch_name",
        "city",
        "micr_code",
        "is_active",
        "source",
    ];

    fn push_record(row: &mut Separated<'_, '_, Postgres, &'static str>, r: &BankMapping) {
        row.push_bind(r.id)
            .push_bind(r.bank_code.clone())
            .push_bind(r.ifsc_code.clone())
            .push_bind(r.branch_name.clone())
            .push_bind(r.city.clone())
            .push_bind(r.micr_code.clone())
            .push_bind(r.is_active)
            .push_bind(r.source.as_str());
    }
}

/// Both depositories share `dp_masters`; stores are scoped by `depository`.
pub struct DpMasterTable;

impl ReferenceTable for DpMasterTable {
    type Record = DpMaster;

    const TABLE: &'static str = "dp_masters";
    const KEY_COLUMN: &'static str = "dp_code";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "depository",
        "dp_code",
        "dp_name",
        "sebi_registration_no",
        "pan",
        "address_line1",
        "address_line2",
        "address_line3",
        "city",
        "state",
        "pin_code",
        "country",
        "phone",
        "fax",
        "email",
        "website",
        "contact_person",
        "compliance_officer",
        "dp_status",
        "registration_date",
        "segment",
        "dp_category",
        "is_active",
        "source",
    ];

    fn push_record(row: &mut Separated<'_, '_, Postgres, &'static str>, r: &DpMaster) {
        row.push_bind(r.id)
            .push_bind(r.depository.as_str())
            .push_bind(r.dp_code.clone())
            .push_bind(r.dp_name.clone())
            .push_bind(r.sebi_registration_no.clone())
            .push_bind(r.pan.clone())
            .push_bind(r.address_line1.clone())
            .push_bind(r.address_line2.clone())
            .push_bind(r.address_line3.clone())
            .push_bind(r.city.clone())
            .push_bind(r.state.clone())
            .push_bind(r.pin_code)
            .push_bind(r.country.clone())
            .push_bind(r.phone.clone())
            .push_bind(r.fax.clone())
            .push_bind(r.email.clone())
            .push_bind(r.website.clone())
            .push_bind(r.contact_person.clone())
            .push_bind(r.compliance_officer.clone())
            .push_bind(r.dp_status.clone())
            .push_bind(r.registration_date.clone())
            .push_bind(r.segment.clone())
            .push_bind(r.dp_category.clone())
            .push_bind(r.is_active)
            .push_bind(r.source.as_str());
    }
}

pub struct PinCodeTable;

impl ReferenceTable for PinCodeTable {
    type Record = PinCodeMaster;

    const TABLE: &'static str = "pin_code_masters";
    const KEY_COLUMN: &'static str = "pin_code";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "pin_code",
        "office_name",
        "office_type",
        "district",
        "state_name",
        "state_code",
        "is_active",
        "source",
    ];

    fn push_record(row: &mut Separated<'_, '_, Postgres, &'static str>, r: &PinCodeMaster) {
        row.push_bind(r.id)
            .push_bind(r.pin_code.clone())
            .push_bind(r.office_name.clone())
            .push_bind(r.office_type.clone())
            .push_bind(r.district.clone())
            .push_bind(r.state_name.clone())
            .push_bind(r.state_code)
            .push_bind(r.is_active)
            .push_bind(r.source.as_str());
    }
}

pub struct StateTable;

impl ReferenceTable for StateTable {
    type Record = StateMaster;

    const TABLE: &'static str = "state_masters";
    const KEY_COLUMN: &'static str = "state_code";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "state_code",
        "state_name",
        "short_name",
        "gst_state_code",
        "census_code",
        "capital",
        "region",
        "country_code",
        "territory_type",
        "remarks",
        "is_active",
        "source",
    ];

    fn push_record(row: &mut Separated<'_, '_, Postgres, &'static str>, r: &StateMaster) {
        row.push_bind(r.id)
            .push_bind(r.state_code.clone())
            .push_bind(r.state_name.clone())
            .push_bind(r.short_name.clone())
            .push_bind(r.gst_state_code)
            .push_bind(r.census_code)
            .push_bind(r.capital.clone())
            .push_bind(r.region.clone())
            .push_bind(r.country_code.clone())
            .push_bind(r.territory_type.clone())
            .push_bind(r.remarks.clone())
            .push_bind(r.is_active)
            .push_bind(r.source.as_str());
    }
}

/// Store for one depository's participant master.
pub fn dp_store(pool: PgPool, depository: Depository) -> PgReferenceStore<DpMasterTable> {
    PgReferenceStore::new(pool).scoped("depository", depository.as_str())
}
