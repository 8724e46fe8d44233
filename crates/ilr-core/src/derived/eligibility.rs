//! Unemployment and benefit facts at the start of an aim, and their
//! assessment against a contract's eligibility rule.

use ilr_model::{EligibilityRule, EsmKey, EsmType, Learner, LearningDelivery};

use crate::config::DerivedDataConfig;
use crate::derived::age::age_at_start;
use crate::employment::{monitorings_applicable_on, status_applicable_on};
use crate::lookup::ReferenceDataLookup;
use crate::predicates::{MonitoringSet, any_esm_in_set, esm_code_for_type};

/// Length-of-unemployment band declared on the status applicable at the
/// start of `delivery`, for a delivery whose contract has an eligibility rule.
///
/// `None` when the delivery has no contract reference, the contract has no
/// eligibility rule, no status applies, or the status carries no LOU
/// monitoring. With more than one LOU entry, the first in record order is
/// used.
pub fn length_of_unemployment_at_start<L: ReferenceDataLookup + ?Sized>(
    learner: &Learner,
    delivery: &LearningDelivery,
    lookup: &L,
) -> Option<i32> {
    eligibility_rule_for(delivery, lookup)?;
    let monitorings =
        monitorings_applicable_on(&learner.learner_employment_statuses, delivery.learn_start_date);
    esm_code_for_type(monitorings, EsmType::Lou)
}

/// Whether the status applicable at the start of `delivery` declares a
/// qualifying benefit, for a delivery whose contract has an eligibility
/// rule.
///
/// `false` when the contract has no eligibility rule or no status applies.
pub fn benefits_at_start<L: ReferenceDataLookup + ?Sized>(
    learner: &Learner,
    delivery: &LearningDelivery,
    lookup: &L,
    config: &DerivedDataConfig,
) -> bool {
    if eligibility_rule_for(delivery, lookup).is_none() {
        return false;
    }
    let qualifying = qualifying_benefits(config);
    let monitorings =
        monitorings_applicable_on(&learner.learner_employment_statuses, delivery.learn_start_date);
    any_esm_in_set(monitorings, &qualifying)
}

fn eligibility_rule_for<'a, L: ReferenceDataLookup + ?Sized>(
    delivery: &LearningDelivery,
    lookup: &'a L,
) -> Option<&'a EligibilityRule> {
    lookup.eligibility_rule(delivery.contract_reference()?)
}

/// BSI keys counted as being on benefits.
pub fn qualifying_benefits(config: &DerivedDataConfig) -> MonitoringSet<EsmKey> {
    MonitoringSet::of_esm_codes(EsmType::Bsi, &config.qualifying_benefit_codes)
}

/// A learner's position at the start of an aim against the eligibility rule
/// of the aim's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityAssessment<'a> {
    pub rule: &'a EligibilityRule,
    pub emp_stat: i32,
    pub length_of_unemployment: Option<i32>,
    pub on_benefits: bool,
    pub age_at_start: Option<i32>,
}

impl EligibilityAssessment<'_> {
    /// Declared band below the rule's minimum. A missing band is not judged.
    pub fn below_minimum_unemployment(&self) -> bool {
        match (self.rule.min_length_of_unemployment, self.length_of_unemployment) {
            (Some(min), Some(band)) => band < min,
            _ => false,
        }
    }

    /// Declared band above the rule's maximum. A missing band is not judged.
    pub fn above_maximum_unemployment(&self) -> bool {
        match (self.rule.max_length_of_unemployment, self.length_of_unemployment) {
            (Some(max), Some(band)) => band > max,
            _ => false,
        }
    }

    /// Rule requires benefits and none was declared.
    pub fn benefits_requirement_unmet(&self) -> bool {
        self.rule.benefits && !self.on_benefits
    }

    /// Age at start outside the rule's inclusive age range.
    pub fn outside_age_range(&self) -> bool {
        let Some(age) = self.age_at_start else {
            return false;
        };
        self.rule.min_age.is_some_and(|min| age < min)
            || self.rule.max_age.is_some_and(|max| age > max)
    }
}

/// Assess `delivery` against the eligibility rule of its contract.
///
/// Looks up the rule by the delivery's contract reference, then reads the
/// employment status applicable on the start date. `None` when the delivery
/// has no contract reference, the contract has no eligibility rule, or no
/// employment status applies at the start.
pub fn assess_eligibility<'a, L: ReferenceDataLookup + ?Sized>(
    learner: &Learner,
    delivery: &LearningDelivery,
    lookup: &'a L,
    config: &DerivedDataConfig,
) -> Option<EligibilityAssessment<'a>> {
    let rule = eligibility_rule_for(delivery, lookup)?;
    let status =
        status_applicable_on(&learner.learner_employment_statuses, delivery.learn_start_date)?;

    let qualifying = qualifying_benefits(config);
    let monitorings = status.employment_status_monitorings.as_slice();

    Some(EligibilityAssessment {
        rule,
        emp_stat: status.emp_stat,
        length_of_unemployment: esm_code_for_type(monitorings, EsmType::Lou),
        on_benefits: any_esm_in_set(monitorings, &qualifying),
        age_at_start: age_at_start(learner, delivery),
    })
}
