//! Configuration for derived-data computations.
//!
//! Code sets that change between funding years are data, not code: they are
//! deserialized with sensible defaults and handed to the computations that
//! need them.

use ilr_model::codes::{benefit_status, prog_type};
use serde::{Deserialize, Serialize};

/// Programme types counted as apprenticeships.
pub const DEFAULT_APPRENTICESHIP_PROG_TYPES: &[i32] = &[
    prog_type::ADVANCED_LEVEL_APPRENTICESHIP,
    prog_type::INTERMEDIATE_LEVEL_APPRENTICESHIP,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_4,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_5,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_6,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_7_PLUS,
    prog_type::APPRENTICESHIP_STANDARD,
];

pub const DEFAULT_TRAINEESHIP_PROG_TYPES: &[i32] = &[prog_type::TRAINEESHIP];

/// Benefit status indicator codes that count as "on benefits".
pub const DEFAULT_QUALIFYING_BENEFIT_CODES: &[i32] = &[
    benefit_status::JOBSEEKERS_ALLOWANCE,
    benefit_status::EMPLOYMENT_AND_SUPPORT_ALLOWANCE,
    benefit_status::OTHER_STATE_BENEFIT,
    benefit_status::UNIVERSAL_CREDIT,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedDataConfig {
    #[serde(default = "default_apprenticeship_prog_types")]
    pub apprenticeship_prog_types: Vec<i32>,
    #[serde(default = "default_traineeship_prog_types")]
    pub traineeship_prog_types: Vec<i32>,
    #[serde(default = "default_qualifying_benefit_codes")]
    pub qualifying_benefit_codes: Vec<i32>,
}

impl Default for DerivedDataConfig {
    fn default() -> Self {
        Self {
            apprenticeship_prog_types: default_apprenticeship_prog_types(),
            traineeship_prog_types: default_traineeship_prog_types(),
            qualifying_benefit_codes: default_qualifying_benefit_codes(),
        }
    }
}

fn default_apprenticeship_prog_types() -> Vec<i32> {
    DEFAULT_APPRENTICESHIP_PROG_TYPES.to_vec()
}

fn default_traineeship_prog_types() -> Vec<i32> {
    DEFAULT_TRAINEESHIP_PROG_TYPES.to_vec()
}

fn default_qualifying_benefit_codes() -> Vec<i32> {
    DEFAULT_QUALIFYING_BENEFIT_CODES.to_vec()
}
