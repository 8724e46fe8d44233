//! Learning deliveries (aims) and their sub-records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codes::{aim_type, prog_type};
use crate::error::ModelError;
use crate::monitoring::{FamKey, FamType};

/// One funded aim a learner is undertaking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearningDelivery {
    pub learn_aim_ref: String,
    pub aim_type: i32,
    /// Positional identifier used to scope errors to this aim.
    pub aim_seq_number: i32,
    pub learn_start_date: NaiveDate,
    #[serde(default)]
    pub orig_learn_start_date: Option<NaiveDate>,
    pub learn_plan_end_date: NaiveDate,
    pub fund_model: i32,
    #[serde(default)]
    pub prog_type: Option<i32>,
    #[serde(default)]
    pub fwork_code: Option<i32>,
    #[serde(default)]
    pub pway_code: Option<i32>,
    #[serde(default)]
    pub std_code: Option<i32>,
    #[serde(default)]
    pub con_ref_number: Option<String>,
    pub comp_status: i32,
    #[serde(default)]
    pub learn_act_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub outcome: Option<i32>,
    #[serde(default, rename = "LearningDeliveryFAMs")]
    pub learning_delivery_fams: Vec<LearningDeliveryFam>,
    #[serde(default)]
    pub app_fin_records: Vec<AppFinRecord>,
}

impl LearningDelivery {
    pub fn is_programme_aim(&self) -> bool {
        self.aim_type == aim_type::PROGRAMME_AIM
    }

    pub fn is_component_aim(&self) -> bool {
        self.aim_type == aim_type::COMPONENT_AIM
    }

    /// Apprenticeship standard: programme type 25 with a standard code.
    pub fn is_standard(&self) -> bool {
        self.prog_type == Some(prog_type::APPRENTICESHIP_STANDARD) && self.std_code.is_some()
    }

    /// Contract reference, treating blank text as absent.
    pub fn contract_reference(&self) -> Option<&str> {
        self.con_ref_number
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty())
    }
}

/// Learning delivery funding and monitoring entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearningDeliveryFam {
    #[serde(rename = "LearnDelFAMType")]
    pub fam_type: FamType,
    #[serde(rename = "LearnDelFAMCode")]
    pub fam_code: String,
    #[serde(default, rename = "LearnDelFAMDateFrom")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, rename = "LearnDelFAMDateTo")]
    pub date_to: Option<NaiveDate>,
}

impl LearningDeliveryFam {
    pub fn new(fam_type: FamType, fam_code: impl Into<String>) -> Self {
        Self {
            fam_type,
            fam_code: fam_code.into(),
            date_from: None,
            date_to: None,
        }
    }

    pub fn key(&self) -> FamKey {
        FamKey::new(self.fam_type, &self.fam_code)
    }

    pub fn matches(&self, fam_type: FamType, code: &str) -> bool {
        self.fam_type == fam_type && self.fam_code.trim().eq_ignore_ascii_case(code.trim())
    }
}

/// Apprenticeship financial record type (`AFinType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AFinType {
    /// Total negotiated price
    Tnp,
    /// Payment record
    Pmr,
}

impl AFinType {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Tnp => "TNP",
            Self::Pmr => "PMR",
        }
    }
}

impl FromStr for AFinType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TNP" => Ok(Self::Tnp),
            "PMR" => Ok(Self::Pmr),
            other => Err(ModelError::UnknownAFinType(other.to_string())),
        }
    }
}

impl fmt::Display for AFinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Typed, coded and dated financial value (e.g. a negotiated price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppFinRecord {
    #[serde(rename = "AFinType")]
    pub afin_type: AFinType,
    #[serde(rename = "AFinCode")]
    pub afin_code: i32,
    #[serde(rename = "AFinDate")]
    pub afin_date: NaiveDate,
    #[serde(rename = "AFinAmount")]
    pub afin_amount: i32,
}
