use std::sync::Arc;

use chrono::NaiveDate;
use ilr_core::DerivedData;
use ilr_core::predicates::has_fund_model;
use ilr_model::Learner;
use ilr_model::codes::fund_model;

use super::date_parameter;
use crate::config::RuleDates;
use crate::handler::{DisplayOptional, ValidationErrorHandler, param};
use crate::rule::Rule;

/// Funding models an apprenticeship may use after the cut-over.
const POST_CUTOVER_FUND_MODELS: [i32; 3] = [
    fund_model::APPRENTICESHIPS,
    fund_model::OTHER_ADULT,
    fund_model::NOT_FUNDED,
];

/// Apprenticeship programmes starting on or after the funding cut-over must
/// be funded under the apprenticeship funding model.
///
/// The programme start is the earliest start of the linked programme aims,
/// so a restart keeps the funding of the programme it restarts.
#[derive(Debug, Clone)]
pub struct FundModel09 {
    derived: Arc<DerivedData>,
    cutover: NaiveDate,
}

impl FundModel09 {
    pub fn new(derived: Arc<DerivedData>, dates: &RuleDates) -> Self {
        Self {
            derived,
            cutover: dates.apprenticeship_funding_cutover,
        }
    }
}

impl Rule for FundModel09 {
    fn name(&self) -> &'static str {
        "FundModel_09"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !self.derived.is_apprenticeship(delivery.prog_type)
                || has_fund_model(delivery, &POST_CUTOVER_FUND_MODELS)
            {
                continue;
            }
            let programme_start = self
                .derived
                .earliest_linked_start_date(learner, delivery)
                .unwrap_or(delivery.learn_start_date);
            if programme_start < self.cutover {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    handler.build_parameter(param::FUND_MODEL, &delivery.fund_model),
                    handler.build_parameter(param::PROG_TYPE, &DisplayOptional(delivery.prog_type)),
                    date_parameter(handler, param::LEARN_START_DATE, programme_start),
                ],
            );
        }
    }
}
