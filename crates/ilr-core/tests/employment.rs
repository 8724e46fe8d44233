//! Tests for employment status resolution.

use chrono::{Days, NaiveDate};
use ilr_core::employment::{
    earliest_status, emp_stat_applicable_on, has_status_on_or_before, monitorings_applicable_on,
    status_applicable_on,
};
use ilr_model::codes::emp_stat;
use ilr_model::{EmploymentStatusMonitoring, EsmType, LearnerEmploymentStatus};
use proptest::collection::vec;
use proptest::prelude::{ProptestConfig, prop_assert, prop_assert_eq, proptest};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn status(code: i32, declared: NaiveDate) -> LearnerEmploymentStatus {
    LearnerEmploymentStatus {
        emp_stat: code,
        date_emp_stat_app: declared,
        ..Default::default()
    }
}

/// Status A declared 2013-01-01, status B declared 2013-06-01.
fn history() -> Vec<LearnerEmploymentStatus> {
    vec![
        status(emp_stat::IN_PAID_EMPLOYMENT, date(2013, 1, 1)),
        status(emp_stat::NOT_EMPLOYED_SEEKING, date(2013, 6, 1)),
    ]
}

#[test]
fn later_declaration_applies_after_it_is_made() {
    let statuses = history();
    let applicable = status_applicable_on(&statuses, date(2013, 8, 1)).unwrap();
    assert_eq!(applicable.emp_stat, emp_stat::NOT_EMPLOYED_SEEKING);
}

#[test]
fn earlier_declaration_applies_before_the_later_one() {
    let statuses = history();
    let applicable = status_applicable_on(&statuses, date(2013, 3, 1)).unwrap();
    assert_eq!(applicable.emp_stat, emp_stat::IN_PAID_EMPLOYMENT);
}

#[test]
fn nothing_applies_before_the_first_declaration() {
    let statuses = history();
    assert!(status_applicable_on(&statuses, date(2012, 12, 31)).is_none());
}

#[test]
fn declaration_applies_on_its_own_date() {
    let statuses = history();
    assert_eq!(
        emp_stat_applicable_on(&statuses, date(2013, 6, 1)),
        Some(emp_stat::NOT_EMPLOYED_SEEKING)
    );
}

#[test]
fn input_order_does_not_change_the_latest_declaration() {
    let mut statuses = history();
    statuses.reverse();
    assert_eq!(
        emp_stat_applicable_on(&statuses, date(2013, 8, 1)),
        Some(emp_stat::NOT_EMPLOYED_SEEKING)
    );
}

#[test]
fn empty_history_resolves_to_nothing() {
    assert!(status_applicable_on(&[], date(2013, 8, 1)).is_none());
    assert!(monitorings_applicable_on(&[], date(2013, 8, 1)).is_empty());
    assert!(!has_status_on_or_before(&[], date(2013, 8, 1)));
    assert!(earliest_status(&[]).is_none());
}

/// Deliberate tie-break: equal declaration dates resolve to the entry that
/// appears first in the learner's record.
#[test]
fn same_day_declarations_resolve_to_first_in_record_order() {
    let statuses = vec![
        status(emp_stat::IN_PAID_EMPLOYMENT, date(2013, 1, 1)),
        status(emp_stat::NOT_EMPLOYED_SEEKING, date(2013, 6, 1)),
        status(emp_stat::NOT_EMPLOYED_NOT_SEEKING, date(2013, 6, 1)),
    ];
    assert_eq!(
        emp_stat_applicable_on(&statuses, date(2013, 8, 1)),
        Some(emp_stat::NOT_EMPLOYED_SEEKING)
    );

    let earliest = vec![
        status(emp_stat::NOT_KNOWN, date(2013, 1, 1)),
        status(emp_stat::IN_PAID_EMPLOYMENT, date(2013, 1, 1)),
    ];
    assert_eq!(earliest_status(&earliest).unwrap().emp_stat, emp_stat::NOT_KNOWN);
}

#[test]
fn monitorings_come_from_the_applicable_status() {
    let mut statuses = history();
    statuses[0]
        .employment_status_monitorings
        .push(EmploymentStatusMonitoring::new(EsmType::Eii, 4));
    statuses[1]
        .employment_status_monitorings
        .push(EmploymentStatusMonitoring::new(EsmType::Lou, 2));

    let before = monitorings_applicable_on(&statuses, date(2013, 3, 1));
    assert_eq!(before, &[EmploymentStatusMonitoring::new(EsmType::Eii, 4)]);

    let after = monitorings_applicable_on(&statuses, date(2013, 8, 1));
    assert_eq!(after, &[EmploymentStatusMonitoring::new(EsmType::Lou, 2)]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resolution_never_goes_backwards(
        offsets in vec(0u64..1_000, 0..8),
        probes in vec(0u64..1_200, 2..10),
    ) {
        let base = date(2013, 1, 1);
        let statuses: Vec<_> = offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| status(i as i32, base + Days::new(*offset)))
            .collect();

        let mut probes = probes;
        probes.sort_unstable();

        let mut last_declared: Option<NaiveDate> = None;
        for probe in probes {
            let on = base + Days::new(probe);
            let resolved = status_applicable_on(&statuses, on).map(|s| s.date_emp_stat_app);
            if let Some(previous) = last_declared {
                let current = resolved.expect("a status that applied earlier still applies later");
                prop_assert!(current >= previous);
            }
            if resolved.is_some() {
                last_declared = resolved;
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(offsets in vec(0u64..1_000, 0..8), probe in 0u64..1_200) {
        let base = date(2013, 1, 1);
        let statuses: Vec<_> = offsets
            .iter()
            .map(|offset| status(emp_stat::IN_PAID_EMPLOYMENT, base + Days::new(*offset)))
            .collect();
        let on = base + Days::new(probe);

        prop_assert_eq!(
            status_applicable_on(&statuses, on),
            status_applicable_on(&statuses, on)
        );
    }
}
