//! Validation configuration.
//!
//! Regulatory thresholds change between funding years, so rules take them
//! from here instead of hard-coding them.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ilr_core::{AcademicYear, DerivedData, DerivedDataConfig, ReferenceDataLookup};
use serde::{Deserialize, Serialize};

const APPRENTICESHIP_FUNDING_CUTOVER: NaiveDate = match NaiveDate::from_ymd_opt(2017, 5, 1) {
    Some(date) => date,
    None => panic!("invalid cut-over date"),
};

/// Configuration for one validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Academic year the submission belongs to.
    pub academic_year: AcademicYear,
    #[serde(default)]
    pub derived: DerivedDataConfig,
    #[serde(default)]
    pub dates: RuleDates,
}

/// Named dates and thresholds used by individual rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDates {
    /// Apprenticeship programmes starting on or after this date are funded
    /// under the apprenticeship funding model.
    pub apprenticeship_funding_cutover: NaiveDate,
    /// Years a start date may precede the start of the academic year.
    pub max_years_before_year_start: i32,
    /// Years a start date may follow the end of the academic year.
    pub max_years_after_year_end: i32,
    pub traineeship_max_planned_years: i32,
    pub minimum_apprenticeship_age: i32,
}

impl Default for RuleDates {
    fn default() -> Self {
        Self {
            apprenticeship_funding_cutover: APPRENTICESHIP_FUNDING_CUTOVER,
            max_years_before_year_start: 10,
            max_years_after_year_end: 1,
            traineeship_max_planned_years: 1,
            minimum_apprenticeship_age: 16,
        }
    }
}

impl ValidationConfig {
    /// Default thresholds for `academic_year`.
    pub fn for_academic_year(academic_year: AcademicYear) -> Self {
        Self {
            academic_year,
            derived: DerivedDataConfig::default(),
            dates: RuleDates::default(),
        }
    }

    /// Parse configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an invalid
    /// academic year.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse validation config")
    }

    /// Build the derived-data service rules share for this run.
    pub fn derived_data(&self, reference: Arc<dyn ReferenceDataLookup>) -> DerivedData {
        DerivedData::new(self.derived.clone(), reference)
    }
}

/// Load validation configuration from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ValidationConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = ValidationConfig::from_json_str(&json)
        .with_context(|| format!("invalid config: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        academic_year = %config.academic_year,
        "Loaded validation config"
    );
    Ok(config)
}
