//! Code values used across learner records.
//!
//! Funding models and programme types are open code sets that change between
//! funding years, so they stay plain integers; rules compare against these
//! named values or against allow-lists supplied by configuration.

/// Funding model codes (`FundModel`).
pub mod fund_model {
    pub const COMMUNITY_LEARNING: i32 = 10;
    pub const SIXTEEN_TO_NINETEEN: i32 = 25;
    pub const ADULT_SKILLS: i32 = 35;
    pub const APPRENTICESHIPS: i32 = 36;
    pub const EUROPEAN_SOCIAL_FUND: i32 = 70;
    pub const OTHER_ADULT: i32 = 81;
    pub const OTHER_SIXTEEN_TO_NINETEEN: i32 = 82;
    pub const NOT_FUNDED: i32 = 99;
}

/// Programme type codes (`ProgType`).
pub mod prog_type {
    pub const ADVANCED_LEVEL_APPRENTICESHIP: i32 = 2;
    pub const INTERMEDIATE_LEVEL_APPRENTICESHIP: i32 = 3;
    pub const HIGHER_APPRENTICESHIP_LEVEL_4: i32 = 20;
    pub const HIGHER_APPRENTICESHIP_LEVEL_5: i32 = 21;
    pub const HIGHER_APPRENTICESHIP_LEVEL_6: i32 = 22;
    pub const HIGHER_APPRENTICESHIP_LEVEL_7_PLUS: i32 = 23;
    pub const TRAINEESHIP: i32 = 24;
    pub const APPRENTICESHIP_STANDARD: i32 = 25;
}

/// Aim type codes (`AimType`).
pub mod aim_type {
    pub const PROGRAMME_AIM: i32 = 1;
    pub const COMPONENT_AIM: i32 = 3;
    pub const NOT_PART_OF_PROGRAMME: i32 = 4;
    pub const CORE_AIM_SIXTEEN_TO_NINETEEN: i32 = 5;
}

/// Employment status codes (`EmpStat`).
pub mod emp_stat {
    pub const IN_PAID_EMPLOYMENT: i32 = 10;
    pub const NOT_EMPLOYED_SEEKING: i32 = 11;
    pub const NOT_EMPLOYED_NOT_SEEKING: i32 = 12;
    pub const NOT_KNOWN: i32 = 98;
}

/// Length of unemployment bands (`ESMType` LOU).
pub mod length_of_unemployment {
    pub const UNDER_SIX_MONTHS: i32 = 1;
    pub const SIX_TO_ELEVEN_MONTHS: i32 = 2;
    pub const TWELVE_TO_TWENTY_THREE_MONTHS: i32 = 3;
    pub const TWENTY_FOUR_TO_THIRTY_FIVE_MONTHS: i32 = 4;
    pub const THIRTY_SIX_MONTHS_PLUS: i32 = 5;
}

/// Benefit status indicator codes (`ESMType` BSI).
pub mod benefit_status {
    pub const JOBSEEKERS_ALLOWANCE: i32 = 1;
    pub const EMPLOYMENT_AND_SUPPORT_ALLOWANCE: i32 = 2;
    pub const OTHER_STATE_BENEFIT: i32 = 3;
    pub const UNIVERSAL_CREDIT: i32 = 4;
}

/// Completion status codes (`CompStatus`).
pub mod comp_status {
    pub const CONTINUING: i32 = 1;
    pub const COMPLETED: i32 = 2;
    pub const WITHDRAWN: i32 = 3;
    pub const BREAK_IN_LEARNING: i32 = 6;
}

/// Restart indicator code under the RES monitoring type.
pub const RESTART_CODE: &str = "1";

/// Learning aim reference of the ESF programme aim.
pub const ESF_PROGRAMME_AIM_REF: &str = "ZESF0001";
