//! Boolean tests over a single delivery or monitoring entry.
//!
//! Every predicate is total: empty collections and absent optional fields
//! yield `false` (or `None` for lookups), never a panic.

use std::collections::HashSet;
use std::hash::Hash;

use ilr_model::{
    AFinType, AppFinRecord, EmploymentStatusMonitoring, EsmKey, EsmType, FamKey, FamType,
    LearningDelivery, LearningDeliveryFam, codes,
};

use crate::config::DerivedDataConfig;

/// Broad programme classification of a programme-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammeClass {
    Apprenticeship,
    Traineeship,
    Other,
}

/// Funding-model membership against a rule family's allow-list.
pub fn has_fund_model(delivery: &LearningDelivery, allowed: &[i32]) -> bool {
    allowed.contains(&delivery.fund_model)
}

/// Programme-type membership; deliveries without a programme type never match.
pub fn has_prog_type(delivery: &LearningDelivery, allowed: &[i32]) -> bool {
    delivery
        .prog_type
        .is_some_and(|prog_type| allowed.contains(&prog_type))
}

pub fn has_aim_type(delivery: &LearningDelivery, allowed: &[i32]) -> bool {
    allowed.contains(&delivery.aim_type)
}

/// Classify a nullable programme type under the configured code sets.
pub fn classify_programme(prog_type: Option<i32>, config: &DerivedDataConfig) -> ProgrammeClass {
    match prog_type {
        Some(code) if config.apprenticeship_prog_types.contains(&code) => {
            ProgrammeClass::Apprenticeship
        }
        Some(code) if config.traineeship_prog_types.contains(&code) => ProgrammeClass::Traineeship,
        _ => ProgrammeClass::Other,
    }
}

pub fn is_traineeship(prog_type: Option<i32>, config: &DerivedDataConfig) -> bool {
    classify_programme(prog_type, config) == ProgrammeClass::Traineeship
}

/// Whether the delivery carries at least one FAM of `fam_type`.
pub fn has_fam_type(fams: &[LearningDeliveryFam], fam_type: FamType) -> bool {
    fams.iter().any(|fam| fam.fam_type == fam_type)
}

/// Whether the delivery carries the FAM `fam_type` with `code`.
pub fn has_fam(fams: &[LearningDeliveryFam], fam_type: FamType, code: &str) -> bool {
    fams.iter().any(|fam| fam.matches(fam_type, code))
}

/// Whether the delivery carries a FAM of `fam_type` with any of `codes`.
pub fn has_any_fam_code(fams: &[LearningDeliveryFam], fam_type: FamType, codes: &[&str]) -> bool {
    codes.iter().any(|code| has_fam(fams, fam_type, code))
}

pub fn fams_of_type(
    fams: &[LearningDeliveryFam],
    fam_type: FamType,
) -> impl Iterator<Item = &LearningDeliveryFam> {
    fams.iter().filter(move |fam| fam.fam_type == fam_type)
}

/// Restart indicator (RES 1) present.
pub fn is_restart(delivery: &LearningDelivery) -> bool {
    has_fam(
        &delivery.learning_delivery_fams,
        FamType::Res,
        codes::RESTART_CODE,
    )
}

/// A caller-supplied set of qualifying or disqualifying monitoring keys.
///
/// Different rules test against different sets, so the sets live with the
/// rule rather than in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoringSet<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> MonitoringSet<K> {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    pub fn insert(&mut self, key: K) {
        self.keys.insert(key);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}

impl<K: Eq + Hash> Default for MonitoringSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for MonitoringSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl MonitoringSet<EsmKey> {
    /// Set of codes under one monitoring type.
    pub fn of_esm_codes(esm_type: EsmType, codes: &[i32]) -> Self {
        codes
            .iter()
            .map(|code| EsmKey::new(esm_type, *code))
            .collect()
    }
}

impl MonitoringSet<FamKey> {
    pub fn of_fam_codes(fam_type: FamType, codes: &[&str]) -> Self {
        codes
            .iter()
            .map(|code| FamKey::new(fam_type, *code))
            .collect()
    }
}

pub fn esm_in_set(entry: &EmploymentStatusMonitoring, set: &MonitoringSet<EsmKey>) -> bool {
    set.contains(&entry.key())
}

pub fn fam_in_set(fam: &LearningDeliveryFam, set: &MonitoringSet<FamKey>) -> bool {
    set.contains(&fam.key())
}

/// First monitoring entry (record order) found in `set`.
pub fn first_esm_in_set<'a>(
    monitorings: &'a [EmploymentStatusMonitoring],
    set: &MonitoringSet<EsmKey>,
) -> Option<&'a EmploymentStatusMonitoring> {
    monitorings.iter().find(|entry| esm_in_set(entry, set))
}

pub fn any_esm_in_set(
    monitorings: &[EmploymentStatusMonitoring],
    set: &MonitoringSet<EsmKey>,
) -> bool {
    first_esm_in_set(monitorings, set).is_some()
}

pub fn any_fam_in_set(fams: &[LearningDeliveryFam], set: &MonitoringSet<FamKey>) -> bool {
    fams.iter().any(|fam| fam_in_set(fam, set))
}

pub fn has_esm_type(monitorings: &[EmploymentStatusMonitoring], esm_type: EsmType) -> bool {
    monitorings.iter().any(|entry| entry.esm_type == esm_type)
}

/// Code of the first monitoring of `esm_type` in record order.
pub fn esm_code_for_type(
    monitorings: &[EmploymentStatusMonitoring],
    esm_type: EsmType,
) -> Option<i32> {
    monitorings
        .iter()
        .find(|entry| entry.esm_type == esm_type)
        .map(|entry| entry.esm_code)
}

/// Whether a financial record of `afin_type` exists, optionally with `afin_code`.
pub fn has_fin_record(
    records: &[AppFinRecord],
    afin_type: AFinType,
    afin_code: Option<i32>,
) -> bool {
    records.iter().any(|record| {
        record.afin_type == afin_type && afin_code.is_none_or(|code| record.afin_code == code)
    })
}

/// Latest-dated financial record of `afin_type` and `afin_code`.
///
/// Equal dates keep the record that appears first.
pub fn latest_fin_record(
    records: &[AppFinRecord],
    afin_type: AFinType,
    afin_code: i32,
) -> Option<&AppFinRecord> {
    records
        .iter()
        .filter(|record| record.afin_type == afin_type && record.afin_code == afin_code)
        .fold(None, |selected: Option<&AppFinRecord>, record| match selected {
            Some(current) if record.afin_date <= current.afin_date => Some(current),
            _ => Some(record),
        })
}
