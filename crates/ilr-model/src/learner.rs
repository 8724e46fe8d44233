use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::delivery::LearningDelivery;
use crate::employment::LearnerEmploymentStatus;

/// A learner and everything validation reads about them.
///
/// `learn_ref_number` is non-empty and unique within a submission; the rule
/// engine rejects submissions that break this before any rule runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Learner {
    pub learn_ref_number: String,
    #[serde(rename = "ULN")]
    pub uln: i64,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub learning_deliveries: Vec<LearningDelivery>,
    #[serde(default)]
    pub learner_employment_statuses: Vec<LearnerEmploymentStatus>,
}

impl Learner {
    /// Find a delivery by its aim sequence number.
    pub fn delivery(&self, aim_seq_number: i32) -> Option<&LearningDelivery> {
        self.learning_deliveries
            .iter()
            .find(|delivery| delivery.aim_seq_number == aim_seq_number)
    }
}
