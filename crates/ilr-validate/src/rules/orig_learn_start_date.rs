//! Original learning start date rules (restarts).

use chrono::NaiveDate;
use ilr_core::AcademicYear;
use ilr_core::dates::add_years;
use ilr_model::Learner;

use super::date_parameter;
use crate::config::RuleDates;
use crate::handler::{ValidationErrorHandler, param};
use crate::rule::Rule;

/// An original start date must not be after the start of the restarted aim.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrigLearnStartDate01;

impl Rule for OrigLearnStartDate01 {
    fn name(&self) -> &'static str {
        "OrigLearnStartDate_01"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            let Some(original) = delivery.orig_learn_start_date else {
                continue;
            };
            if original <= delivery.learn_start_date {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    date_parameter(handler, param::ORIG_LEARN_START_DATE, original),
                    date_parameter(handler, param::LEARN_START_DATE, delivery.learn_start_date),
                ],
            );
        }
    }
}

/// An original start date no more than the configured number of years
/// before the start of the academic year.
#[derive(Debug, Clone, Copy)]
pub struct OrigLearnStartDate02 {
    earliest_start: NaiveDate,
}

impl OrigLearnStartDate02 {
    pub fn new(academic_year: &AcademicYear, dates: &RuleDates) -> Self {
        Self {
            earliest_start: add_years(academic_year.start(), -dates.max_years_before_year_start),
        }
    }
}

impl Rule for OrigLearnStartDate02 {
    fn name(&self) -> &'static str {
        "OrigLearnStartDate_02"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            let Some(original) = delivery.orig_learn_start_date else {
                continue;
            };
            if original >= self.earliest_start {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![date_parameter(
                    handler,
                    param::ORIG_LEARN_START_DATE,
                    original,
                )],
            );
        }
    }
}
