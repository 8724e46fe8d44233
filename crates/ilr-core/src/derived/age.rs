//! Learner age facts.

use ilr_model::{Learner, LearningDelivery};

use crate::academic_year::AcademicYear;
use crate::dates::age_on;

/// Age on the delivery's start date; `None` without a date of birth.
pub fn age_at_start(learner: &Learner, delivery: &LearningDelivery) -> Option<i32> {
    learner
        .date_of_birth
        .map(|dob| age_on(dob, delivery.learn_start_date))
}

/// Age on 31 August of the academic year.
pub fn age_at_academic_year_start(learner: &Learner, year: &AcademicYear) -> Option<i32> {
    learner
        .date_of_birth
        .map(|dob| age_on(dob, year.august_thirty_first()))
}
