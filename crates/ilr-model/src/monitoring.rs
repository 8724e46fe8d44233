//! Typed monitoring codes.
//!
//! Delivery FAMs and employment status monitorings are (type, code) pairs.
//! The type half is a closed enum so a mistyped monitoring type cannot be
//! compared against, and the pair is carried as a composite key rather than a
//! concatenated string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Learning delivery funding and monitoring type (`LearnDelFAMType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FamType {
    /// Source of funding
    Sof,
    /// Full or co-funding indicator
    Ffi,
    /// Workplace learning indicator
    Wpl,
    /// Eligibility for enhanced apprenticeship funding
    Eef,
    /// Restart indicator
    Res,
    /// Advanced learner loan
    Adl,
    /// Advanced learner loan bursary funding
    Alb,
    /// Apprenticeship sector subject area
    Asl,
    /// Learning support funding
    Lsf,
    /// Family English, maths and language
    Fln,
    /// Learning delivery monitoring
    Ldm,
    /// Devolved area monitoring
    Dam,
    /// HE monitoring
    Hem,
    /// Household situation
    Hhs,
    /// Apprenticeship contract type
    Act,
    /// Special projects and pilots
    Spp,
    /// National skills academy indicator
    Nsa,
    /// Work programme participation
    Wpp,
    /// Percentage of online delivery
    Pod,
    /// Maths condition of funding
    Mcf,
    /// English condition of funding
    Ecf,
}

impl FamType {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sof,
            Self::Ffi,
            Self::Wpl,
            Self::Eef,
            Self::Res,
            Self::Adl,
            Self::Alb,
            Self::Asl,
            Self::Lsf,
            Self::Fln,
            Self::Ldm,
            Self::Dam,
            Self::Hem,
            Self::Hhs,
            Self::Act,
            Self::Spp,
            Self::Nsa,
            Self::Wpp,
            Self::Pod,
            Self::Mcf,
            Self::Ecf,
        ]
    }

    /// Wire code as it appears in learner records.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sof => "SOF",
            Self::Ffi => "FFI",
            Self::Wpl => "WPL",
            Self::Eef => "EEF",
            Self::Res => "RES",
            Self::Adl => "ADL",
            Self::Alb => "ALB",
            Self::Asl => "ASL",
            Self::Lsf => "LSF",
            Self::Fln => "FLN",
            Self::Ldm => "LDM",
            Self::Dam => "DAM",
            Self::Hem => "HEM",
            Self::Hhs => "HHS",
            Self::Act => "ACT",
            Self::Spp => "SPP",
            Self::Nsa => "NSA",
            Self::Wpp => "WPP",
            Self::Pod => "POD",
            Self::Mcf => "MCF",
            Self::Ecf => "ECF",
        }
    }
}

impl FromStr for FamType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|fam_type| fam_type.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ModelError::UnknownFamType(code.to_string()))
    }
}

impl fmt::Display for FamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Employment status monitoring type (`ESMType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EsmType {
    /// Employment intensity indicator
    Eii,
    /// Length of unemployment
    Lou,
    /// Length of employment
    Loe,
    /// Benefit status indicator
    Bsi,
    /// Previous education indicator
    Pei,
    /// Self employment indicator
    Sei,
    /// Small employer
    Sem,
    /// Other employment type
    Oet,
}

impl EsmType {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Eii,
            Self::Lou,
            Self::Loe,
            Self::Bsi,
            Self::Pei,
            Self::Sei,
            Self::Sem,
            Self::Oet,
        ]
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Eii => "EII",
            Self::Lou => "LOU",
            Self::Loe => "LOE",
            Self::Bsi => "BSI",
            Self::Pei => "PEI",
            Self::Sei => "SEI",
            Self::Sem => "SEM",
            Self::Oet => "OET",
        }
    }
}

impl FromStr for EsmType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|esm_type| esm_type.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ModelError::UnknownEsmType(code.to_string()))
    }
}

impl fmt::Display for EsmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Composite key of a delivery FAM: type plus code.
///
/// FAM codes are kept as text because some types use zero-padded codes
/// (e.g. LDM `034`). Codes are trimmed and upper-cased on construction, so
/// keys compare the same way [`LearningDeliveryFam::matches`] does.
///
/// [`LearningDeliveryFam::matches`]: crate::LearningDeliveryFam::matches
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FamKey {
    fam_type: FamType,
    code: String,
}

impl FamKey {
    pub fn new(fam_type: FamType, code: impl AsRef<str>) -> Self {
        Self {
            fam_type,
            code: code.as_ref().trim().to_ascii_uppercase(),
        }
    }

    pub fn fam_type(&self) -> FamType {
        self.fam_type
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for FamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.fam_type, self.code)
    }
}

/// Composite key of an employment status monitoring: type plus code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EsmKey {
    pub esm_type: EsmType,
    pub code: i32,
}

impl EsmKey {
    pub const fn new(esm_type: EsmType, code: i32) -> Self {
        Self { esm_type, code }
    }
}

impl fmt::Display for EsmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.esm_type, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fam_type_parses_case_insensitively() {
        assert_eq!("res".parse::<FamType>().unwrap(), FamType::Res);
        assert_eq!(" LDM ".parse::<FamType>().unwrap(), FamType::Ldm);
    }

    #[test]
    fn unknown_fam_type_is_rejected() {
        let err = "XYZ".parse::<FamType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown learning delivery FAM type: XYZ");
    }

    #[test]
    fn every_esm_type_round_trips_through_its_code() {
        for esm_type in EsmType::all() {
            assert_eq!(esm_type.code().parse::<EsmType>().unwrap(), *esm_type);
        }
    }

    #[test]
    fn keys_display_as_type_and_code() {
        assert_eq!(FamKey::new(FamType::Ldm, "034").to_string(), "LDM:034");
        assert_eq!(EsmKey::new(EsmType::Lou, 2).to_string(), "LOU:2");
    }

    #[test]
    fn fam_key_codes_are_trimmed_and_upper_cased() {
        let key = FamKey::new(FamType::Hhs, " a1 ");
        assert_eq!(key.code(), "A1");
        assert_eq!(key.fam_type(), FamType::Hhs);
        assert_eq!(key, FamKey::new(FamType::Hhs, "A1"));
    }
}
