use std::sync::Arc;

use ilr_core::DerivedData;
use ilr_core::employment::has_status_on_or_before;
use ilr_model::Learner;

use super::date_parameter;
use crate::handler::{DisplayOptional, ValidationErrorHandler, param};
use crate::rule::Rule;

/// Apprenticeship aims need an employment status declared on or before
/// their start date.
#[derive(Debug, Clone)]
pub struct EmpStat02 {
    derived: Arc<DerivedData>,
}

impl EmpStat02 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for EmpStat02 {
    fn name(&self) -> &'static str {
        "EmpStat_02"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !self.derived.is_apprenticeship(delivery.prog_type) {
                continue;
            }
            if has_status_on_or_before(
                &learner.learner_employment_statuses,
                delivery.learn_start_date,
            ) {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                    handler.build_parameter(param::PROG_TYPE, &DisplayOptional(delivery.prog_type)),
                ],
            );
        }
    }
}
