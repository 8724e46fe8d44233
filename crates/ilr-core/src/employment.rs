//! Employment status resolution.
//!
//! A learner's employment history is a set of declarations, each applying
//! from its declaration date until superseded. The status applicable on a
//! date is the most recent declaration made on or before that date.
//!
//! When two declarations share the latest qualifying date, the one that
//! appears first in the learner's record wins. This mirrors first-match
//! selection in declaration order and is independent of how the slice was
//! sorted by any earlier stage.

use chrono::NaiveDate;
use ilr_model::{EmploymentStatusMonitoring, LearnerEmploymentStatus};

/// Select the employment status applicable on `reference_date`.
///
/// Scans `statuses` once. Returns `None` when the slice is empty or every
/// declaration post-dates the reference date.
pub fn status_applicable_on(
    statuses: &[LearnerEmploymentStatus],
    reference_date: NaiveDate,
) -> Option<&LearnerEmploymentStatus> {
    statuses
        .iter()
        .filter(|status| status.date_emp_stat_app <= reference_date)
        .fold(None, |selected: Option<&LearnerEmploymentStatus>, status| {
            match selected {
                // Strictly later only; equal dates keep the earlier entry.
                Some(current) if status.date_emp_stat_app <= current.date_emp_stat_app => {
                    Some(current)
                }
                _ => Some(status),
            }
        })
}

/// Employment status code applicable on `reference_date`.
pub fn emp_stat_applicable_on(
    statuses: &[LearnerEmploymentStatus],
    reference_date: NaiveDate,
) -> Option<i32> {
    status_applicable_on(statuses, reference_date).map(|status| status.emp_stat)
}

/// Monitorings of the status applicable on `reference_date`.
///
/// Empty when no status applies.
pub fn monitorings_applicable_on(
    statuses: &[LearnerEmploymentStatus],
    reference_date: NaiveDate,
) -> &[EmploymentStatusMonitoring] {
    status_applicable_on(statuses, reference_date)
        .map(|status| status.employment_status_monitorings.as_slice())
        .unwrap_or_default()
}

/// Whether any status was declared on or before `reference_date`.
pub fn has_status_on_or_before(
    statuses: &[LearnerEmploymentStatus],
    reference_date: NaiveDate,
) -> bool {
    statuses
        .iter()
        .any(|status| status.date_emp_stat_app <= reference_date)
}

/// The first-declared status, first in record order on ties.
pub fn earliest_status(statuses: &[LearnerEmploymentStatus]) -> Option<&LearnerEmploymentStatus> {
    statuses
        .iter()
        .fold(None, |selected: Option<&LearnerEmploymentStatus>, status| {
            match selected {
                Some(current) if status.date_emp_stat_app >= current.date_emp_stat_app => {
                    Some(current)
                }
                _ => Some(status),
            }
        })
}
