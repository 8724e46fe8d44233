//! Learning actual end date rules.

use chrono::NaiveDate;
use ilr_core::AcademicYear;
use ilr_model::Learner;

use super::date_parameter;
use crate::handler::{ValidationErrorHandler, param};
use crate::rule::Rule;

/// An aim cannot end before it starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnActEndDate01;

impl Rule for LearnActEndDate01 {
    fn name(&self) -> &'static str {
        "LearnActEndDate_01"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            let Some(end) = delivery.learn_act_end_date else {
                continue;
            };
            if end >= delivery.learn_start_date {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                    date_parameter(handler, param::LEARN_ACT_END_DATE, end),
                ],
            );
        }
    }
}

/// An actual end date cannot fall after the end of the academic year being
/// returned.
#[derive(Debug, Clone, Copy)]
pub struct LearnActEndDate04 {
    year_end: NaiveDate,
}

impl LearnActEndDate04 {
    pub fn new(academic_year: &AcademicYear) -> Self {
        Self {
            year_end: academic_year.end(),
        }
    }
}

impl Rule for LearnActEndDate04 {
    fn name(&self) -> &'static str {
        "LearnActEndDate_04"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            let Some(end) = delivery.learn_act_end_date else {
                continue;
            };
            if end <= self.year_end {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![date_parameter(handler, param::LEARN_ACT_END_DATE, end)],
            );
        }
    }
}
