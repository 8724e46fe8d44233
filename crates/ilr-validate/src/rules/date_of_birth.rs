//! Date of birth rules.

use std::sync::Arc;

use ilr_core::DerivedData;
use ilr_core::derived::age_at_start;
use ilr_core::predicates::has_fund_model;
use ilr_model::Learner;
use ilr_model::codes::fund_model;

use super::date_parameter;
use crate::config::RuleDates;
use crate::handler::{DisplayOptional, ValidationErrorHandler, param};
use crate::rule::Rule;

/// Apprentices must have reached the minimum apprenticeship age when an
/// apprenticeship aim starts.
#[derive(Debug, Clone)]
pub struct DateOfBirth23 {
    derived: Arc<DerivedData>,
    minimum_age: i32,
}

impl DateOfBirth23 {
    pub fn new(derived: Arc<DerivedData>, dates: &RuleDates) -> Self {
        Self {
            derived,
            minimum_age: dates.minimum_apprenticeship_age,
        }
    }
}

impl Rule for DateOfBirth23 {
    fn name(&self) -> &'static str {
        "DateOfBirth_23"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        let Some(date_of_birth) = learner.date_of_birth else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            if !self.derived.is_apprenticeship(delivery.prog_type) {
                continue;
            }
            if age_at_start(learner, delivery).is_none_or(|age| age >= self.minimum_age) {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    date_parameter(handler, param::DATE_OF_BIRTH, date_of_birth),
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                ],
            );
        }
    }
}

/// ESF learners must be within the age range of the contract's eligibility
/// rule at the start of the aim.
#[derive(Debug, Clone)]
pub struct DateOfBirth24 {
    derived: Arc<DerivedData>,
}

impl DateOfBirth24 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for DateOfBirth24 {
    fn name(&self) -> &'static str {
        "DateOfBirth_24"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        let Some(date_of_birth) = learner.date_of_birth else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            if !has_fund_model(delivery, &[fund_model::EUROPEAN_SOCIAL_FUND]) {
                continue;
            }
            let outside = self
                .derived
                .assess_eligibility(learner, delivery)
                .is_some_and(|assessment| assessment.outside_age_range());
            if !outside {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    date_parameter(handler, param::DATE_OF_BIRTH, date_of_birth),
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                    handler.build_parameter(
                        param::CON_REF_NUMBER,
                        &DisplayOptional(delivery.contract_reference()),
                    ),
                ],
            );
        }
    }
}
