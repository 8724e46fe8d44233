//! Shared builders for rule and engine tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_core::{AcademicYear, DerivedData, DerivedDataConfig, InMemoryReferenceData};
use ilr_model::codes::{aim_type, comp_status, fund_model};
use ilr_model::{
    ContractAllocation, EligibilityRule, EmploymentStatusMonitoring, EsmType, Learner,
    LearnerEmploymentStatus, LearningDelivery,
};
use ilr_validate::{ErrorCollector, Rule, ValidationError};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The 2018/19 academic year: 2018-08-01 to 2019-07-31.
pub fn academic_year() -> AcademicYear {
    AcademicYear::starting_in(2018).unwrap()
}

pub fn make_delivery(aim_seq: i32, start: NaiveDate) -> LearningDelivery {
    LearningDelivery {
        learn_aim_ref: "60133533".to_string(),
        aim_type: aim_type::NOT_PART_OF_PROGRAMME,
        aim_seq_number: aim_seq,
        learn_start_date: start,
        learn_plan_end_date: start + chrono::Days::new(180),
        fund_model: fund_model::ADULT_SKILLS,
        comp_status: comp_status::CONTINUING,
        ..Default::default()
    }
}

pub fn make_programme_aim(aim_seq: i32, prog_type: i32, start: NaiveDate) -> LearningDelivery {
    LearningDelivery {
        learn_aim_ref: "ZPROG001".to_string(),
        aim_type: aim_type::PROGRAMME_AIM,
        prog_type: Some(prog_type),
        ..make_delivery(aim_seq, start)
    }
}

pub fn make_esf_aim(
    aim_seq: i32,
    aim_ref: &str,
    contract: &str,
    start: NaiveDate,
) -> LearningDelivery {
    LearningDelivery {
        learn_aim_ref: aim_ref.to_string(),
        fund_model: fund_model::EUROPEAN_SOCIAL_FUND,
        con_ref_number: Some(contract.to_string()),
        ..make_delivery(aim_seq, start)
    }
}

pub fn make_status(
    emp_stat: i32,
    declared: NaiveDate,
    monitorings: &[(EsmType, i32)],
) -> LearnerEmploymentStatus {
    LearnerEmploymentStatus {
        emp_stat,
        date_emp_stat_app: declared,
        emp_id: None,
        employment_status_monitorings: monitorings
            .iter()
            .map(|(esm_type, code)| EmploymentStatusMonitoring::new(*esm_type, *code))
            .collect(),
    }
}

pub fn make_learner(learn_ref: &str, deliveries: Vec<LearningDelivery>) -> Learner {
    Learner {
        learn_ref_number: learn_ref.to_string(),
        uln: 1_000_000_042,
        date_of_birth: Some(date(1995, 3, 14)),
        learning_deliveries: deliveries,
        learner_employment_statuses: Vec::new(),
    }
}

/// ESF-1: allocated 2017-01-01 to 2020-12-31, no new starts from 2019-06-01.
/// Its eligibility rule wants LOU band 3 to 4, benefits, and age 25 or over.
pub fn esf_reference() -> InMemoryReferenceData {
    InMemoryReferenceData::new()
        .with_contract_allocation(ContractAllocation {
            contract_allocation_number: "ESF-1".to_string(),
            start_date: date(2017, 1, 1),
            end_date: Some(date(2020, 12, 31)),
            stop_new_starts_from_date: Some(date(2019, 6, 1)),
            funding_stream_period_code: Some("ESF1420".to_string()),
        })
        .with_eligibility_rule(EligibilityRule {
            contract_allocation_number: "ESF-1".to_string(),
            min_length_of_unemployment: Some(3),
            max_length_of_unemployment: Some(4),
            benefits: true,
            min_age: Some(25),
            max_age: None,
        })
}

pub fn derived(reference: InMemoryReferenceData) -> Arc<DerivedData> {
    Arc::new(DerivedData::new(
        DerivedDataConfig::default(),
        Arc::new(reference),
    ))
}

pub fn derived_without_reference() -> Arc<DerivedData> {
    derived(InMemoryReferenceData::new())
}

/// Run one rule over one learner and collect what it reports.
pub fn run(rule: &impl Rule, learner: &Learner) -> Vec<ValidationError> {
    let collector = ErrorCollector::new();
    rule.validate(learner, &collector);
    collector.into_errors()
}
