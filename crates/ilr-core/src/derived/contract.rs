//! Contract-level derived facts.

use chrono::NaiveDate;
use ilr_model::{ContractAllocation, LearningDelivery};

use crate::dates::{Boundary, is_between};
use crate::lookup::ReferenceDataLookup;

/// Latest start date among deliveries sharing `delivery`'s contract reference.
///
/// The delivery itself takes part when it is in `deliveries`. Contract
/// references compare case-insensitively after trimming. `None` when the
/// delivery has no contract reference or nothing in `deliveries` shares it.
pub fn latest_start_for_contract(
    delivery: &LearningDelivery,
    deliveries: &[LearningDelivery],
) -> Option<NaiveDate> {
    let reference = delivery.contract_reference()?;
    deliveries
        .iter()
        .filter(|candidate| {
            candidate
                .contract_reference()
                .is_some_and(|other| other.eq_ignore_ascii_case(reference))
        })
        .map(|candidate| candidate.learn_start_date)
        .max()
}

/// Outcome of testing a delivery start against its contract allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractStartCheck {
    /// Delivery carries no contract reference.
    NoContract,
    /// Contract reference has no allocation in reference data.
    UnknownContract,
    BeforeAllocationStart,
    AfterAllocationEnd,
    /// Start on or after the allocation's stop-new-starts date.
    AfterStopNewStarts,
    WithinAllocation,
}

/// Test `start_date` against an allocation.
///
/// The allocation period is inclusive at both ends; the stop-new-starts date
/// itself is already closed to new starts.
pub fn check_start_against_allocation(
    start_date: NaiveDate,
    allocation: &ContractAllocation,
) -> ContractStartCheck {
    let end = allocation.end_date.unwrap_or(NaiveDate::MAX);
    if !is_between(start_date, allocation.start_date, end, Boundary::Inclusive) {
        return if start_date < allocation.start_date {
            ContractStartCheck::BeforeAllocationStart
        } else {
            ContractStartCheck::AfterAllocationEnd
        };
    }
    if allocation
        .stop_new_starts_from_date
        .is_some_and(|stop| start_date >= stop)
    {
        return ContractStartCheck::AfterStopNewStarts;
    }
    ContractStartCheck::WithinAllocation
}

/// Test a delivery's start against the allocation of its contract.
pub fn check_contract_start<L: ReferenceDataLookup + ?Sized>(
    delivery: &LearningDelivery,
    lookup: &L,
) -> ContractStartCheck {
    let Some(reference) = delivery.contract_reference() else {
        return ContractStartCheck::NoContract;
    };
    match lookup.contract_allocation(reference) {
        Some(allocation) => check_start_against_allocation(delivery.learn_start_date, allocation),
        None => ContractStartCheck::UnknownContract,
    }
}
