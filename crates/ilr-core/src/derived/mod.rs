//! Derived-data computations.
//!
//! Each computation synthesizes one fact from a learner's deliveries and
//! employment history (plus read-only reference data where noted). All are
//! pure: the same inputs always give the same output.
//!
//! | computation                          | scans                | no match | many matches    |
//! |--------------------------------------|----------------------|----------|-----------------|
//! | [`is_apprenticeship`]                | configured types     | `false`  | n/a             |
//! | [`earliest_linked_start_date`]       | linked programme     | `None`   | minimum start   |
//! | [`earliest_learner_start_date`]      | all deliveries       | `None`   | minimum start   |
//! | [`standard_programme_start_date`]    | standard programme   | `None`   | minimum start   |
//! | [`latest_start_for_contract`]        | same contract        | `None`   | maximum start   |
//! | [`length_of_unemployment_at_start`]  | rule + status        | `None`   | first LOU       |
//! | [`benefits_at_start`]                | rule + status        | `false`  | any BSI in set  |
//! | [`assess_eligibility`]               | rule + status        | `None`   | n/a             |

mod age;
mod contract;
mod eligibility;
mod programme;

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::{Learner, LearningDelivery};

pub use age::{age_at_academic_year_start, age_at_start};
pub use contract::{
    ContractStartCheck, check_contract_start, check_start_against_allocation,
    latest_start_for_contract,
};
pub use eligibility::{
    EligibilityAssessment, assess_eligibility, benefits_at_start, length_of_unemployment_at_start,
    qualifying_benefits,
};
pub use programme::{
    ProgrammeKey, StandardStartCheck, check_standard_start, earliest_learner_start_date,
    earliest_linked_start_date, is_apprenticeship, standard_programme_start_date,
    validity_window_for,
};

use crate::cache::{DerivedDataCache, DerivedFact};
use crate::config::DerivedDataConfig;
use crate::lookup::ReferenceDataLookup;

/// Derived-data service shared by rules.
///
/// Bundles configuration, reference data and a per-learner cache so rules
/// receive their dependencies by injection rather than reaching for globals.
pub struct DerivedData {
    config: DerivedDataConfig,
    reference: Arc<dyn ReferenceDataLookup>,
    cache: DerivedDataCache,
}

impl DerivedData {
    pub fn new(config: DerivedDataConfig, reference: Arc<dyn ReferenceDataLookup>) -> Self {
        Self {
            config,
            reference,
            cache: DerivedDataCache::new(),
        }
    }

    pub fn config(&self) -> &DerivedDataConfig {
        &self.config
    }

    pub fn reference(&self) -> &dyn ReferenceDataLookup {
        self.reference.as_ref()
    }

    pub fn cache(&self) -> &DerivedDataCache {
        &self.cache
    }

    pub fn is_apprenticeship(&self, prog_type: Option<i32>) -> bool {
        is_apprenticeship(prog_type, &self.config)
    }

    pub fn is_traineeship(&self, prog_type: Option<i32>) -> bool {
        crate::predicates::is_traineeship(prog_type, &self.config)
    }

    pub fn earliest_linked_start_date(
        &self,
        learner: &Learner,
        delivery: &LearningDelivery,
    ) -> Option<NaiveDate> {
        let key = ProgrammeKey::of(delivery)?;
        self.cache.get_or_compute(
            &learner.learn_ref_number,
            DerivedFact::EarliestLinkedStart(key),
            || earliest_linked_start_date(delivery, &learner.learning_deliveries),
        )
    }

    pub fn standard_programme_start_date(
        &self,
        learner: &Learner,
        delivery: &LearningDelivery,
    ) -> Option<NaiveDate> {
        let std_code = delivery.std_code?;
        self.cache.get_or_compute(
            &learner.learn_ref_number,
            DerivedFact::StandardProgrammeStart(std_code),
            || standard_programme_start_date(delivery, &learner.learning_deliveries),
        )
    }

    pub fn latest_start_for_contract(
        &self,
        learner: &Learner,
        delivery: &LearningDelivery,
    ) -> Option<NaiveDate> {
        let reference = delivery.contract_reference()?;
        self.cache.get_or_compute(
            &learner.learn_ref_number,
            DerivedFact::latest_contract_start(reference),
            || latest_start_for_contract(delivery, &learner.learning_deliveries),
        )
    }

    pub fn check_standard_start(
        &self,
        learner: &Learner,
        delivery: &LearningDelivery,
    ) -> StandardStartCheck {
        check_standard_start(delivery, &learner.learning_deliveries, self.reference())
    }

    pub fn check_contract_start(&self, delivery: &LearningDelivery) -> ContractStartCheck {
        check_contract_start(delivery, self.reference())
    }

    pub fn length_of_unemployment_at_start(
        &self,
        learner: &Learner,
        delivery: &LearningDelivery,
    ) -> Option<i32> {
        length_of_unemployment_at_start(learner, delivery, self.reference())
    }

    pub fn benefits_at_start(&self, learner: &Learner, delivery: &LearningDelivery) -> bool {
        benefits_at_start(learner, delivery, self.reference(), &self.config)
    }

    pub fn assess_eligibility(
        &self,
        learner: &Learner,
        delivery: &LearningDelivery,
    ) -> Option<EligibilityAssessment<'_>> {
        assess_eligibility(learner, delivery, self.reference(), &self.config)
    }

    /// Forget cached facts for a learner once it has been validated.
    pub fn finish_learner(&self, learner: &Learner) {
        self.cache.evict_learner(&learner.learn_ref_number);
    }
}

impl std::fmt::Debug for DerivedData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedData")
            .field("config", &self.config)
            .field("cached_facts", &self.cache.len())
            .finish_non_exhaustive()
    }
}
