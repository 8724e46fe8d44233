//! Reference data records supplied alongside a submission.
//!
//! These are read-only inputs queried by key; validation never creates or
//! changes them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::monitoring::{EsmType, FamType};

/// Period during which an apprenticeship standard may be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardValidity {
    pub standard_code: i32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Last date on which a learner may start on the standard.
    #[serde(default)]
    pub last_new_start_date: Option<NaiveDate>,
}

impl StandardValidity {
    /// Latest date a new start is accepted, if the window is closed at all.
    pub fn last_start_date(&self) -> Option<NaiveDate> {
        match (self.last_new_start_date, self.end_date) {
            (Some(last), Some(end)) => Some(last.min(end)),
            (Some(last), None) => Some(last),
            (None, end) => end,
        }
    }
}

/// Contract allocation a delivery's contract reference points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAllocation {
    pub contract_allocation_number: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// New starts on or after this date are not funded.
    #[serde(default)]
    pub stop_new_starts_from_date: Option<NaiveDate>,
    #[serde(default)]
    pub funding_stream_period_code: Option<String>,
}

/// Contract-specific eligibility constraints.
///
/// Unemployment bounds are compared against length-of-unemployment bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    pub contract_allocation_number: String,
    #[serde(default)]
    pub min_length_of_unemployment: Option<i32>,
    #[serde(default)]
    pub max_length_of_unemployment: Option<i32>,
    /// Learner must be on a qualifying benefit at the start of the aim.
    #[serde(default)]
    pub benefits: bool,
    #[serde(default)]
    pub min_age: Option<i32>,
    #[serde(default)]
    pub max_age: Option<i32>,
}

/// Lookup table a coded value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LookupType {
    AimType,
    CompStatus,
    EmpStat,
    FundModel,
    Outcome,
    ProgType,
    LearnDelFam(FamType),
    EmploymentMonitoring(EsmType),
}

impl FromStr for LookupType {
    type Err = ModelError;

    /// Parses `EmpStat`, `FundModel`, ... and the qualified forms
    /// `LearnDelFAM.<type>` and `ESM.<type>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let unknown = || ModelError::UnknownLookupType(value.to_string());

        if let Some((table, sub_type)) = value.split_once('.') {
            return match table.to_ascii_uppercase().as_str() {
                "LEARNDELFAM" => sub_type
                    .parse()
                    .map(Self::LearnDelFam)
                    .map_err(|_| unknown()),
                "ESM" => sub_type
                    .parse()
                    .map(Self::EmploymentMonitoring)
                    .map_err(|_| unknown()),
                _ => Err(unknown()),
            };
        }

        match value.to_ascii_uppercase().as_str() {
            "AIMTYPE" => Ok(Self::AimType),
            "COMPSTATUS" => Ok(Self::CompStatus),
            "EMPSTAT" => Ok(Self::EmpStat),
            "FUNDMODEL" => Ok(Self::FundModel),
            "OUTCOME" => Ok(Self::Outcome),
            "PROGTYPE" => Ok(Self::ProgType),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for LookupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AimType => f.write_str("AimType"),
            Self::CompStatus => f.write_str("CompStatus"),
            Self::EmpStat => f.write_str("EmpStat"),
            Self::FundModel => f.write_str("FundModel"),
            Self::Outcome => f.write_str("Outcome"),
            Self::ProgType => f.write_str("ProgType"),
            Self::LearnDelFam(fam_type) => write!(f, "LearnDelFAM.{fam_type}"),
            Self::EmploymentMonitoring(esm_type) => write!(f, "ESM.{esm_type}"),
        }
    }
}

/// One code in a lookup table with its validity period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupValue {
    pub code: String,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
}

impl LookupValue {
    /// Whether the code is in force on `as_of` (both ends inclusive).
    pub fn is_current(&self, as_of: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| from <= as_of)
            && self.valid_to.is_none_or(|to| as_of <= to)
    }
}
