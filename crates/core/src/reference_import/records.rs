//! Reference record types produced by the importer.
//!
//! Each record carries a generated id, its natural key, the attributes
//! copied from fixed column positions, an activation flag and a
//! provenance marker.

use serde::{Deserialize, Serialize};

use super::RecordSource;
use crate::types::RecordId;

/// Bank code master (`bank_master`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankMaster {
    pub id: RecordId,
    pub bank_code: String,
    pub bank_name: Option<String>,
    pub ifsc_prefix: Option<String>,
    pub is_active: bool,
    pub source: RecordSource,
}

/// Bank code to IFSC branch mapping (`bank_mapping`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankMapping {
    pub id: RecordId,
    pub bank_code: Option<String>,
    pub ifsc_code: String,
    pub branch_name: Option<String>,
    pub city: Option<String>,
    pub micr_code: Option<String>,
    pub is_active: bool,
    pub source: RecordSource,
}

/// Depository that published a participant master file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Depository {
    Nsdl,
    Cdsl,
}

impl Depository {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nsdl => "nsdl",
            Self::Cdsl => "cdsl",
        }
    }
}

impl std::fmt::Display for Depository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Depository participant master (`nsdl_dp` / `cdsl_dp`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DpMaster {
    pub id: RecordId,
    pub depository: Depository,
    pub dp_code: String,
    pub dp_name: Option<String>,
    pub sebi_registration_no: Option<String>,
    pub pan: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<i32>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub contact_person: Option<String>,
    pub compliance_officer: Option<String>,
    pub dp_status: Option<String>,
    pub registration_date: Option<String>,
    pub segment: Option<String>,
    pub dp_category: Option<String>,
    pub is_active: bool,
    pub source: RecordSource,
}

/// Postal pin code master (`pin_code`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinCodeMaster {
    pub id: RecordId,
    pub pin_code: String,
    pub office_name: Option<String>,
    pub office_type: Option<String>,
    pub district: Option<String>,
    pub state_name: Option<String>,
    pub state_code: Option<i32>,
    pub is_active: bool,
    pub source: RecordSource,
}

/// State code master (`state`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMaster {
    pub id: RecordId,
    pub state_code: String,
    pub state_name: Option<String>,
    pub short_name: Option<String>,
    pub gst_state_code: Option<i32>,
    pub census_code: Option<i32>,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub country_code: Option<String>,
    pub territory_type: Option<String>,
    pub remarks: Option<String>,
    pub is_active: bool,
    pub source: RecordSource,
}
