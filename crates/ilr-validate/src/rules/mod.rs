//! Individual rules.
//!
//! Each rule composes predicates and derived data into one pass/fail
//! condition and reports every violation it finds. Rules receive the
//! derived-data service and any thresholds at construction.

mod afin_type;
mod con_ref_number;
mod date_of_birth;
mod emp_stat;
mod esm_type;
mod fund_model;
mod learn_act_end_date;
mod learn_plan_end_date;
mod learn_start_date;
mod orig_learn_start_date;

use chrono::NaiveDate;

use crate::handler::{DisplayDate, ErrorParameter, ValidationErrorHandler};

pub use afin_type::AFinType10;
pub use con_ref_number::{ConRefNumber03, ConRefNumber05};
pub use date_of_birth::{DateOfBirth23, DateOfBirth24};
pub use emp_stat::EmpStat02;
pub use esm_type::{EsmType11, EsmType13, EsmType14, EsmType15};
pub use fund_model::FundModel09;
pub use learn_act_end_date::{LearnActEndDate01, LearnActEndDate04};
pub use learn_plan_end_date::LearnPlanEndDate03;
pub use learn_start_date::{LearnStartDate02, LearnStartDate05, LearnStartDate12, LearnStartDate16};
pub use orig_learn_start_date::{OrigLearnStartDate01, OrigLearnStartDate02};

fn date_parameter(
    handler: &dyn ValidationErrorHandler,
    name: &str,
    date: NaiveDate,
) -> ErrorParameter {
    handler.build_parameter(name, &DisplayDate(date))
}
