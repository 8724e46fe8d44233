//! Per-learner memoization of date-valued derived facts.
//!
//! Derived facts are pure functions of a learner's record, so several rules
//! asking for the same fact within one validation pass can share one
//! computation. Each fact is keyed by the learner reference plus exactly the
//! inputs that determine it, never by the delivery that asked. Entries must be
//! evicted once a learner has been validated, since a later pass may reuse
//! the reference for a different record.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use crate::derived::ProgrammeKey;

/// Date-valued facts that are worth caching, with the inputs they depend on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DerivedFact {
    /// Earliest start of the programme aims sharing this key.
    EarliestLinkedStart(ProgrammeKey),
    /// Earliest start of the standard programme with this standard code.
    StandardProgrammeStart(i32),
    /// Latest start on this contract; the reference is trimmed and upper-cased.
    LatestContractStart(String),
}

impl DerivedFact {
    /// Fact key for a contract reference, matching references the way
    /// contract lookups do.
    pub fn latest_contract_start(contract_reference: &str) -> Self {
        Self::LatestContractStart(contract_reference.trim().to_ascii_uppercase())
    }
}

type CacheKey = (String, DerivedFact);

#[derive(Debug, Default)]
pub struct DerivedDataCache {
    entries: Mutex<HashMap<CacheKey, Option<NaiveDate>>>,
}

impl DerivedDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value or compute and remember it.
    ///
    /// `compute` runs without the lock held; two threads racing on the same
    /// key compute the same value.
    pub fn get_or_compute(
        &self,
        learn_ref_number: &str,
        fact: DerivedFact,
        compute: impl FnOnce() -> Option<NaiveDate>,
    ) -> Option<NaiveDate> {
        let key = (learn_ref_number.to_string(), fact);
        if let Some(value) = self.lock().get(&key) {
            return *value;
        }
        let value = compute();
        self.lock().insert(key, value);
        value
    }

    /// Drop every entry for a learner.
    pub fn evict_learner(&self, learn_ref_number: &str) {
        self.lock().retain(|(learner, _), _| learner != learn_ref_number);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Option<NaiveDate>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
