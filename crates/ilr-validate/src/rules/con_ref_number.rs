//! Contract reference rules for ESF-funded aims.

use std::sync::Arc;

use ilr_core::DerivedData;
use ilr_core::derived::{ContractStartCheck, check_start_against_allocation};
use ilr_core::predicates::has_fund_model;
use ilr_model::Learner;
use ilr_model::codes::{ESF_PROGRAMME_AIM_REF, fund_model};

use super::date_parameter;
use crate::handler::{ValidationErrorHandler, param};
use crate::rule::Rule;

const ESF_FUND_MODELS: [i32; 1] = [fund_model::EUROPEAN_SOCIAL_FUND];

/// The contract reference of an ESF aim must name a known contract
/// allocation.
#[derive(Debug, Clone)]
pub struct ConRefNumber03 {
    derived: Arc<DerivedData>,
}

impl ConRefNumber03 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for ConRefNumber03 {
    fn name(&self) -> &'static str {
        "ConRefNumber_03"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !has_fund_model(delivery, &ESF_FUND_MODELS) {
                continue;
            }
            if self.derived.check_contract_start(delivery) != ContractStartCheck::UnknownContract {
                continue;
            }
            let reference = delivery.contract_reference().unwrap_or_default();
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    handler.build_parameter(param::FUND_MODEL, &delivery.fund_model),
                    handler.build_parameter(param::CON_REF_NUMBER, &reference),
                ],
            );
        }
    }
}

/// The latest start on a contract, reported against the ESF programme aim,
/// must fall inside the contract allocation and before it stops new starts.
#[derive(Debug, Clone)]
pub struct ConRefNumber05 {
    derived: Arc<DerivedData>,
}

impl ConRefNumber05 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for ConRefNumber05 {
    fn name(&self) -> &'static str {
        "ConRefNumber_05"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        let programme_aims = learner.learning_deliveries.iter().filter(|delivery| {
            has_fund_model(delivery, &ESF_FUND_MODELS)
                && delivery
                    .learn_aim_ref
                    .trim()
                    .eq_ignore_ascii_case(ESF_PROGRAMME_AIM_REF)
        });

        for delivery in programme_aims {
            let Some(reference) = delivery.contract_reference() else {
                continue;
            };
            let Some(allocation) = self.derived.reference().contract_allocation(reference) else {
                continue;
            };
            let Some(latest_start) = self.derived.latest_start_for_contract(learner, delivery)
            else {
                continue;
            };
            if check_start_against_allocation(latest_start, allocation)
                == ContractStartCheck::WithinAllocation
            {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    handler.build_parameter(param::CON_REF_NUMBER, &reference),
                    date_parameter(handler, param::LEARN_START_DATE, latest_start),
                ],
            );
        }
    }
}
