//! Learning start date rules.

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_core::AcademicYear;
use ilr_core::DerivedData;
use ilr_core::dates::add_years;
use ilr_core::derived::StandardStartCheck;
use ilr_model::Learner;

use super::date_parameter;
use crate::config::RuleDates;
use crate::handler::{DisplayOptional, ValidationErrorHandler, param};
use crate::rule::Rule;

/// Start date no more than the configured number of years before the start
/// of the academic year.
#[derive(Debug, Clone, Copy)]
pub struct LearnStartDate02 {
    earliest_start: NaiveDate,
}

impl LearnStartDate02 {
    pub fn new(academic_year: &AcademicYear, dates: &RuleDates) -> Self {
        Self {
            earliest_start: add_years(academic_year.start(), -dates.max_years_before_year_start),
        }
    }
}

impl Rule for LearnStartDate02 {
    fn name(&self) -> &'static str {
        "LearnStartDate_02"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if delivery.learn_start_date < self.earliest_start {
                self.report(
                    handler,
                    learner,
                    Some(delivery.aim_seq_number),
                    vec![date_parameter(
                        handler,
                        param::LEARN_START_DATE,
                        delivery.learn_start_date,
                    )],
                );
            }
        }
    }
}

/// Start date after the date of birth.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnStartDate05;

impl Rule for LearnStartDate05 {
    fn name(&self) -> &'static str {
        "LearnStartDate_05"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        let Some(date_of_birth) = learner.date_of_birth else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            if delivery.learn_start_date <= date_of_birth {
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
}

/// Start date no more than the configured number of years after the end of
/// the academic year.
#[derive(Debug, Clone, Copy)]
pub struct LearnStartDate12 {
    latest_start: NaiveDate,
}

impl LearnStartDate12 {
    pub fn new(academic_year: &AcademicYear, dates: &RuleDates) -> Self {
        Self {
            latest_start: add_years(academic_year.end(), dates.max_years_after_year_end),
        }
    }
}

impl Rule for LearnStartDate12 {
    fn name(&self) -> &'static str {
        "LearnStartDate_12"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if delivery.learn_start_date > self.latest_start {
                self.report(
                    handler,
                    learner,
                    Some(delivery.aim_seq_number),
                    vec![date_parameter(
                        handler,
                        param::LEARN_START_DATE,
                        delivery.learn_start_date,
                    )],
                );
            }
        }
    }
}

/// The programme of an apprenticeship standard must start while the
/// standard is open to new starts.
#[derive(Debug, Clone)]
pub struct LearnStartDate16 {
    derived: Arc<DerivedData>,
}

impl LearnStartDate16 {
    pub fn new(derived: Arc<DerivedData>) -> Self {
        Self { derived }
    }
}

impl Rule for LearnStartDate16 {
    fn name(&self) -> &'static str {
        "LearnStartDate_16"
    }

    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        Some(&self.derived)
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in learner.learning_deliveries.iter().filter(|d| d.is_standard()) {
            let StandardStartCheck::OutsideValidity { programme_start } =
                self.derived.check_standard_start(learner, delivery)
            else {
                continue;
            };
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    date_parameter(handler, param::LEARN_START_DATE, programme_start),
                    handler.build_parameter(param::STD_CODE, &DisplayOptional(delivery.std_code)),
                ],
            );
        }
    }
}
