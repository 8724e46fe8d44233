//! Programme-level derived facts.

use chrono::NaiveDate;
use ilr_model::codes::prog_type;
use ilr_model::{LearningDelivery, StandardValidity};

use crate::config::DerivedDataConfig;
use crate::dates::{Boundary, is_between};
use crate::lookup::ReferenceDataLookup;
use crate::predicates::{ProgrammeClass, classify_programme};

/// Whether a programme type denotes an apprenticeship under `config`.
///
/// A missing programme type is never an apprenticeship.
pub fn is_apprenticeship(prog_type: Option<i32>, config: &DerivedDataConfig) -> bool {
    classify_programme(prog_type, config) == ProgrammeClass::Apprenticeship
}

/// Identity of the programme a delivery belongs to.
///
/// Aims with the same key belong to the same programme instance, including
/// restarts of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgrammeKey {
    pub prog_type: i32,
    pub fwork_code: Option<i32>,
    pub pway_code: Option<i32>,
    pub std_code: Option<i32>,
}

impl ProgrammeKey {
    /// `None` for deliveries outside any programme.
    pub fn of(delivery: &LearningDelivery) -> Option<Self> {
        Some(Self {
            prog_type: delivery.prog_type?,
            fwork_code: delivery.fwork_code,
            pway_code: delivery.pway_code,
            std_code: delivery.std_code,
        })
    }
}

/// Earliest start date of the programme aims linked to `delivery`.
///
/// Scans `deliveries` for programme aims sharing the delivery's
/// [`ProgrammeKey`] and takes the minimum start date. `None` when the delivery
/// has no programme type or no linked programme aim exists.
pub fn earliest_linked_start_date(
    delivery: &LearningDelivery,
    deliveries: &[LearningDelivery],
) -> Option<NaiveDate> {
    let key = ProgrammeKey::of(delivery)?;
    deliveries
        .iter()
        .filter(|candidate| {
            candidate.is_programme_aim() && ProgrammeKey::of(candidate) == Some(key)
        })
        .map(|candidate| candidate.learn_start_date)
        .min()
}

/// Earliest start date across all of a learner's deliveries.
pub fn earliest_learner_start_date(deliveries: &[LearningDelivery]) -> Option<NaiveDate> {
    deliveries
        .iter()
        .map(|delivery| delivery.learn_start_date)
        .min()
}

/// Start date of the apprenticeship standard programme `delivery` belongs to.
///
/// Minimum start date over programme aims of programme type 25 with the
/// delivery's standard code. Framework codes play no part. `None` when the
/// delivery has no standard code or no such programme aim exists.
pub fn standard_programme_start_date(
    delivery: &LearningDelivery,
    deliveries: &[LearningDelivery],
) -> Option<NaiveDate> {
    let std_code = delivery.std_code?;
    deliveries
        .iter()
        .filter(|candidate| {
            candidate.is_programme_aim()
                && candidate.prog_type == Some(prog_type::APPRENTICESHIP_STANDARD)
                && candidate.std_code == Some(std_code)
        })
        .map(|candidate| candidate.learn_start_date)
        .min()
}

/// First validity window (record order) admitting a start on `start_date`.
///
/// Both ends are inclusive; an open window has no closing date.
pub fn validity_window_for(
    start_date: NaiveDate,
    windows: &[StandardValidity],
) -> Option<&StandardValidity> {
    windows.iter().find(|window| match window.last_start_date() {
        Some(last) => is_between(start_date, window.start_date, last, Boundary::Inclusive),
        None => window.start_date <= start_date,
    })
}

/// Outcome of testing a standard programme start against its validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardStartCheck {
    /// No standard code, no programme aim, or no windows for the standard.
    NotApplicable,
    WithinValidity { programme_start: NaiveDate },
    OutsideValidity { programme_start: NaiveDate },
}

/// Test the standard programme start of `delivery` against the standard's
/// validity windows.
pub fn check_standard_start<L: ReferenceDataLookup + ?Sized>(
    delivery: &LearningDelivery,
    deliveries: &[LearningDelivery],
    lookup: &L,
) -> StandardStartCheck {
    let (Some(std_code), Some(programme_start)) = (
        delivery.std_code,
        standard_programme_start_date(delivery, deliveries),
    ) else {
        return StandardStartCheck::NotApplicable;
    };

    let windows = lookup.standard_validity_windows(std_code);
    if windows.is_empty() {
        return StandardStartCheck::NotApplicable;
    }

    if validity_window_for(programme_start, windows).is_some() {
        StandardStartCheck::WithinValidity { programme_start }
    } else {
        StandardStartCheck::OutsideValidity { programme_start }
    }
}
