use std::sync::Arc;

use ilr_core::DerivedData;
use ilr_core::dates::add_years;
use ilr_model::Learner;

use super::date_parameter;
use crate::config::RuleDates;
use crate::handler::{DisplayOptional, ValidationErrorHandler, param};
use crate::rule::{Rule, Severity};

/// A traineeship programme should not be planned to last longer than the
/// configured number of years.
#[derive(Debug, Clone)]
pub struct LearnPlanEndDate03 {
    derived: Arc<DerivedData>,
    max_years: i32,
}

impl LearnPlanEndDate03 {
    pub fn new(derived: Arc<DerivedData>, dates: &RuleDates) -> Self {
        Self {
            derived,
            max_years: dates.traineeship_max_planned_years,
        }
    }
}

impl Rule for LearnPlanEndDate03 {
    fn name(&self) -> &'static str {
        "LearnPlanEndDate_03"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !delivery.is_programme_aim() || !self.derived.is_traineeship(delivery.prog_type) {
                continue;
            }
            let latest_end = add_years(delivery.learn_start_date, self.max_years);
            if delivery.learn_plan_end_date <= latest_end {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                    date_parameter(
                        handler,
                        param::LEARN_PLAN_END_DATE,
                        delivery.learn_plan_end_date,
                    ),
                    handler.build_parameter(param::PROG_TYPE, &DisplayOptional(delivery.prog_type)),
                ],
            );
        }
    }
}
