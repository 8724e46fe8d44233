//! Employment status monitoring rules.

use std::sync::Arc;

use ilr_core::DerivedData;
use ilr_core::predicates::has_fund_model;
use ilr_model::codes::{emp_stat, fund_model};
use ilr_model::{EsmType, Learner, LookupType};

use super::date_parameter;
use crate::handler::{DisplayOptional, ValidationErrorHandler, param};
use crate::rule::Rule;

const ESF_FUND_MODELS: [i32; 1] = [fund_model::EUROPEAN_SOCIAL_FUND];

/// ESF aims: the length of unemployment at start must lie within the bounds
/// of the contract's eligibility rule.
#[derive(Debug, Clone)]
pub struct EsmType11 {
    derived: Arc<DerivedData>,
}

impl EsmType11 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for EsmType11 {
    fn name(&self) -> &'static str {
        "ESMType_11"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !has_fund_model(delivery, &ESF_FUND_MODELS) {
                continue;
            }
            let Some(assessment) = self.derived.assess_eligibility(learner, delivery) else {
                continue;
            };
            if !assessment.below_minimum_unemployment() && !assessment.above_maximum_unemployment()
            {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    handler.build_parameter(
                        param::CON_REF_NUMBER,
                        &DisplayOptional(delivery.contract_reference()),
                    ),
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                    handler.build_parameter(param::ESM_TYPE, &EsmType::Lou),
                    handler.build_parameter(
                        param::ESM_CODE,
                        &DisplayOptional(assessment.length_of_unemployment),
                    ),
                ],
            );
        }
    }
}

/// ESF aims on a contract that requires benefits need a qualifying benefit
/// status at start.
#[derive(Debug, Clone)]
pub struct EsmType13 {
    derived: Arc<DerivedData>,
}

impl EsmType13 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for EsmType13 {
    fn name(&self) -> &'static str {
        "ESMType_13"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !has_fund_model(delivery, &ESF_FUND_MODELS) {
                continue;
            }
            let unmet = self
                .derived
                .assess_eligibility(learner, delivery)
                .is_some_and(|assessment| assessment.benefits_requirement_unmet());
            if !unmet {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    handler.build_parameter(
                        param::CON_REF_NUMBER,
                        &DisplayOptional(delivery.contract_reference()),
                    ),
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                    handler.build_parameter(param::ESM_TYPE, &EsmType::Bsi),
                ],
            );
        }
    }
}

/// Length of unemployment must not be declared while in paid employment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsmType14;

impl Rule for EsmType14 {
    fn name(&self) -> &'static str {
        "ESMType_14"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        let employed = learner
            .learner_employment_statuses
            .iter()
            .filter(|status| status.emp_stat == emp_stat::IN_PAID_EMPLOYMENT);

        for status in employed {
            let declared = status
                .employment_status_monitorings
                .iter()
                .filter(|monitoring| monitoring.esm_type == EsmType::Lou);
            for monitoring in declared {
                self.report(
                    handler,
                    learner,
                    None,
                    vec![
                        handler.build_parameter(param::EMP_STAT, &status.emp_stat),
                        date_parameter(handler, param::DATE_EMP_STAT_APP, status.date_emp_stat_app),
                        handler.build_parameter(param::ESM_TYPE, &monitoring.esm_type),
                        handler.build_parameter(param::ESM_CODE, &monitoring.esm_code),
                    ],
                );
            }
        }
    }
}

/// Every monitoring code must be a valid lookup value on the date its status
/// applies from.
#[derive(Debug, Clone)]
pub struct EsmType15 {
    derived: Arc<DerivedData>,
}

impl EsmType15 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for EsmType15 {
    fn name(&self) -> &'static str {
        "ESMType_15"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        let reference = self.derived.reference();
        for status in &learner.learner_employment_statuses {
            for monitoring in &status.employment_status_monitorings {
                let valid = reference.is_current_lookup_value(
                    LookupType::EmploymentMonitoring(monitoring.esm_type),
                    &monitoring.esm_code.to_string(),
                    status.date_emp_stat_app,
                );
                if valid {
                    continue;
                }
                self.report(
                    handler,
                    learner,
                    None,
                    vec![
                        date_parameter(handler, param::DATE_EMP_STAT_APP, status.date_emp_stat_app),
                        handler.build_parameter(param::ESM_TYPE, &monitoring.esm_type),
                        handler.build_parameter(param::ESM_CODE, &monitoring.esm_code),
                    ],
                );
            }
        }
    }
}
