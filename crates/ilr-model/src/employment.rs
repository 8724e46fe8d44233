//! Employment status declarations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::monitoring::{EsmKey, EsmType};

/// One employment declaration for a learner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearnerEmploymentStatus {
    pub emp_stat: i32,
    pub date_emp_stat_app: NaiveDate,
    #[serde(default)]
    pub emp_id: Option<i32>,
    #[serde(default)]
    pub employment_status_monitorings: Vec<EmploymentStatusMonitoring>,
}

/// Employment status monitoring entry (e.g. length of unemployment band).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentStatusMonitoring {
    #[serde(rename = "ESMType")]
    pub esm_type: EsmType,
    #[serde(rename = "ESMCode")]
    pub esm_code: i32,
}

impl EmploymentStatusMonitoring {
    pub const fn new(esm_type: EsmType, esm_code: i32) -> Self {
        Self { esm_type, esm_code }
    }

    pub const fn key(&self) -> EsmKey {
        EsmKey::new(self.esm_type, self.esm_code)
    }
}
