//! Reference data lookup.
//!
//! Reference data is supplied by an external collaborator. This layer only
//! needs synchronous key lookups that return nothing on no match; retries,
//! timeouts and caching of remote sources belong to the implementor.

use std::collections::HashMap;

use chrono::NaiveDate;
use ilr_model::{ContractAllocation, EligibilityRule, LookupType, LookupValue, StandardValidity};

/// Read-only reference data queried by derived data and rules.
pub trait ReferenceDataLookup: Send + Sync {
    /// Validity windows of an apprenticeship standard; empty when unknown.
    fn standard_validity_windows(&self, standard_code: i32) -> &[StandardValidity];

    /// Contract allocation for a contract reference.
    fn contract_allocation(&self, contract_reference: &str) -> Option<&ContractAllocation>;

    /// Eligibility rule attached to a contract reference.
    fn eligibility_rule(&self, contract_reference: &str) -> Option<&EligibilityRule>;

    /// Whether `code` is a valid value of `lookup_type` on `as_of`.
    fn is_current_lookup_value(&self, lookup_type: LookupType, code: &str, as_of: NaiveDate)
    -> bool;
}

/// In-memory reference data keyed for direct lookup.
///
/// Contract references are matched case-insensitively after trimming.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceData {
    standards: HashMap<i32, Vec<StandardValidity>>,
    contracts: HashMap<String, ContractAllocation>,
    eligibility_rules: HashMap<String, EligibilityRule>,
    lookups: HashMap<LookupType, Vec<LookupValue>>,
}

impl InMemoryReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_standard_validity(&mut self, validity: StandardValidity) {
        self.standards
            .entry(validity.standard_code)
            .or_default()
            .push(validity);
    }

    /// Insert a contract allocation, returning any allocation it replaced.
    pub fn add_contract_allocation(
        &mut self,
        allocation: ContractAllocation,
    ) -> Option<ContractAllocation> {
        let key = contract_key(&allocation.contract_allocation_number);
        self.contracts.insert(key, allocation)
    }

    /// Insert an eligibility rule, returning any rule it replaced.
    pub fn add_eligibility_rule(&mut self, rule: EligibilityRule) -> Option<EligibilityRule> {
        let key = contract_key(&rule.contract_allocation_number);
        self.eligibility_rules.insert(key, rule)
    }

    pub fn add_lookup_value(&mut self, lookup_type: LookupType, value: LookupValue) {
        self.lookups.entry(lookup_type).or_default().push(value);
    }

    #[must_use]
    pub fn with_standard_validity(mut self, validity: StandardValidity) -> Self {
        self.add_standard_validity(validity);
        self
    }

    #[must_use]
    pub fn with_contract_allocation(mut self, allocation: ContractAllocation) -> Self {
        self.add_contract_allocation(allocation);
        self
    }

    #[must_use]
    pub fn with_eligibility_rule(mut self, rule: EligibilityRule) -> Self {
        self.add_eligibility_rule(rule);
        self
    }

    #[must_use]
    pub fn with_lookup_value(mut self, lookup_type: LookupType, value: LookupValue) -> Self {
        self.add_lookup_value(lookup_type, value);
        self
    }

    pub fn standard_count(&self) -> usize {
        self.standards.len()
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    pub fn eligibility_rule_count(&self) -> usize {
        self.eligibility_rules.len()
    }
}

impl ReferenceDataLookup for InMemoryReferenceData {
    fn standard_validity_windows(&self, standard_code: i32) -> &[StandardValidity] {
        self.standards
            .get(&standard_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn contract_allocation(&self, contract_reference: &str) -> Option<&ContractAllocation> {
        self.contracts.get(&contract_key(contract_reference))
    }

    fn eligibility_rule(&self, contract_reference: &str) -> Option<&EligibilityRule> {
        self.eligibility_rules.get(&contract_key(contract_reference))
    }

    fn is_current_lookup_value(
        &self,
        lookup_type: LookupType,
        code: &str,
        as_of: NaiveDate,
    ) -> bool {
        let code = code.trim();
        self.lookups.get(&lookup_type).is_some_and(|values| {
            values.iter().any(|value| {
                value.code.trim().eq_ignore_ascii_case(code) && value.is_current(as_of)
            })
        })
    }
}

fn contract_key(contract_reference: &str) -> String {
    contract_reference.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn contract_lookup_ignores_case_and_whitespace() {
        let data = InMemoryReferenceData::new().with_contract_allocation(ContractAllocation {
            contract_allocation_number: "ESF-2201".to_string(),
            start_date: date(2018, 8, 1),
            end_date: None,
            stop_new_starts_from_date: None,
            funding_stream_period_code: None,
        });

        assert!(data.contract_allocation(" esf-2201 ").is_some());
        assert!(data.contract_allocation("ESF-9999").is_none());
    }

    #[test]
    fn unknown_standard_has_no_windows() {
        let data = InMemoryReferenceData::new();
        assert!(data.standard_validity_windows(17).is_empty());
    }

    #[test]
    fn lookup_values_respect_validity() {
        let data = InMemoryReferenceData::new().with_lookup_value(
            LookupType::EmpStat,
            LookupValue {
                code: "11".to_string(),
                valid_from: None,
                valid_to: Some(date(2019, 7, 31)),
            },
        );

        assert!(data.is_current_lookup_value(LookupType::EmpStat, "11", date(2019, 7, 31)));
        assert!(!data.is_current_lookup_value(LookupType::EmpStat, "11", date(2019, 8, 1)));
        assert!(!data.is_current_lookup_value(LookupType::EmpStat, "12", date(2019, 1, 1)));
        assert!(!data.is_current_lookup_value(LookupType::FundModel, "11", date(2019, 1, 1)));
    }
}
