//! Tests for contract, funding model, financial record and standard rules.

mod common;

use common::{
    date, derived, derived_without_reference, esf_reference, make_delivery, make_esf_aim,
    make_learner, make_programme_aim, run,
};
use ilr_core::InMemoryReferenceData;
use ilr_model::codes::{aim_type, fund_model, prog_type};
use ilr_model::{AFinType, AppFinRecord, LearningDelivery, StandardValidity};
use ilr_validate::rules::{
    AFinType10, ConRefNumber03, ConRefNumber05, FundModel09, LearnStartDate16,
};
use ilr_validate::{RuleDates, param};

#[test]
fn unknown_esf_contract_is_reported() {
    let rule = ConRefNumber03::new(derived(esf_reference()));
    let mut not_esf = make_esf_aim(4, "60133533", "ESF-9", date(2018, 9, 1));
    not_esf.fund_model = fund_model::ADULT_SKILLS;
    let mut no_contract = make_esf_aim(3, "60133533", "", date(2018, 9, 1));
    no_contract.con_ref_number = None;
    let learner = make_learner(
        "LRN1",
        vec![
            make_esf_aim(1, "ZESF0001", "ESF-9", date(2018, 9, 1)),
            make_esf_aim(2, "ZESF0001", "esf-1", date(2018, 9, 1)),
            no_contract,
            not_esf,
        ],
    );

    let errors = run(&rule, &learner);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].aim_sequence_number, Some(1));
    assert_eq!(errors[0].parameter(param::CON_REF_NUMBER), Some("ESF-9"));
    assert_eq!(errors[0].parameter(param::FUND_MODEL), Some("70"));
}

#[test]
fn latest_contract_start_after_stop_new_starts_is_reported() {
    let rule = ConRefNumber05::new(derived(esf_reference()));
    let learner = make_learner(
        "LRN1",
        vec![
            make_esf_aim(1, "ZESF0001", "ESF-1", date(2017, 2, 1)),
            make_esf_aim(2, "60133533", "ESF-1", date(2019, 6, 1)),
        ],
    );

    let errors = run(&rule, &learner);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].aim_sequence_number, Some(1));
    assert_eq!(errors[0].parameter(param::LEARN_START_DATE), Some("01/06/2019"));
}

#[test]
fn latest_contract_start_before_stop_new_starts_is_accepted() {
    let rule = ConRefNumber05::new(derived(esf_reference()));
    let learner = make_learner(
        "LRN1",
        vec![
            make_esf_aim(1, "ZESF0001", "ESF-1", date(2017, 2, 1)),
            make_esf_aim(2, "60133533", "ESF-1", date(2019, 5, 31)),
        ],
    );
    assert!(run(&rule, &learner).is_empty());
}

#[test]
fn contract_start_before_allocation_is_reported() {
    let rule = ConRefNumber05::new(derived(esf_reference()));
    let learner = make_learner(
        "LRN1",
        vec![make_esf_aim(1, "ZESF0001", "ESF-1", date(2016, 12, 31))],
    );
    assert_eq!(run(&rule, &learner).len(), 1);
}

#[test]
fn apprenticeship_after_cutover_must_use_apprenticeship_funding() {
    let rule = FundModel09::new(derived_without_reference(), &RuleDates::default());
    let learner = make_learner(
        "LRN1",
        vec![
            make_programme_aim(1, prog_type::APPRENTICESHIP_STANDARD, date(2017, 5, 1)),
            make_programme_aim(2, prog_type::ADVANCED_LEVEL_APPRENTICESHIP, date(2017, 4, 30)),
            LearningDelivery {
                fund_model: fund_model::APPRENTICESHIPS,
                ..make_programme_aim(3, prog_type::APPRENTICESHIP_STANDARD, date(2018, 9, 1))
            },
        ],
    );

    let errors = run(&rule, &learner);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].aim_sequence_number, Some(1));
    assert_eq!(errors[0].parameter(param::FUND_MODEL), Some("35"));
    assert_eq!(errors[0].parameter(param::LEARN_START_DATE), Some("01/05/2017"));
}

#[test]
fn restart_keeps_the_funding_of_the_original_programme() {
    let rule = FundModel09::new(derived_without_reference(), &RuleDates::default());
    let mut original =
        make_programme_aim(1, prog_type::ADVANCED_LEVEL_APPRENTICESHIP, date(2016, 9, 1));
    original.fwork_code = Some(420);
    original.pway_code = Some(1);
    let restart = LearningDelivery {
        aim_seq_number: 2,
        learn_start_date: date(2018, 9, 1),
        ..original.clone()
    };
    let learner = make_learner("LRN1", vec![original, restart]);

    assert!(run(&rule, &learner).is_empty());
}

#[test]
fn programmes_sharing_a_sequence_number_are_judged_separately() {
    let framework = |fwork_code, start| LearningDelivery {
        fwork_code: Some(fwork_code),
        ..make_programme_aim(1, prog_type::ADVANCED_LEVEL_APPRENTICESHIP, start)
    };
    let forward = vec![
        framework(420, date(2016, 9, 1)),
        framework(999, date(2018, 9, 1)),
    ];
    let reversed: Vec<_> = forward.iter().rev().cloned().collect();

    for deliveries in [forward, reversed] {
        let rule = FundModel09::new(derived_without_reference(), &RuleDates::default());
        let errors = run(&rule, &make_learner("LRN1", deliveries));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].parameter(param::LEARN_START_DATE), Some("01/09/2018"));
    }
}

fn tnp(code: i32, on: chrono::NaiveDate) -> AppFinRecord {
    AppFinRecord {
        afin_type: AFinType::Tnp,
        afin_code: code,
        afin_date: on,
        afin_amount: 9_000,
    }
}

#[test]
fn training_price_after_actual_end_is_reported() {
    let mut aim = make_programme_aim(1, prog_type::APPRENTICESHIP_STANDARD, date(2018, 9, 1));
    aim.fund_model = fund_model::APPRENTICESHIPS;
    aim.learn_act_end_date = Some(date(2019, 3, 1));
    aim.app_fin_records = vec![
        tnp(1, date(2018, 9, 1)),
        tnp(1, date(2019, 4, 1)),
        tnp(2, date(2019, 5, 1)),
    ];
    let learner = make_learner("LRN1", vec![aim]);

    let errors = run(&AFinType10, &learner);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].parameter(param::AFIN_TYPE), Some("TNP"));
    assert_eq!(errors[0].parameter(param::AFIN_CODE), Some("1"));
    assert_eq!(errors[0].parameter(param::AFIN_DATE), Some("01/04/2019"));
}

#[test]
fn training_price_on_the_end_date_is_accepted() {
    let mut aim = make_programme_aim(1, prog_type::APPRENTICESHIP_STANDARD, date(2018, 9, 1));
    aim.fund_model = fund_model::APPRENTICESHIPS;
    aim.learn_act_end_date = Some(date(2019, 3, 1));
    aim.app_fin_records = vec![tnp(1, date(2019, 3, 1))];

    let mut open = aim.clone();
    open.aim_seq_number = 2;
    open.learn_act_end_date = None;
    open.app_fin_records = vec![tnp(1, date(2020, 1, 1))];

    let learner = make_learner("LRN1", vec![aim, open]);
    assert!(run(&AFinType10, &learner).is_empty());
}

#[test]
fn standard_started_after_last_new_start_date_is_reported() {
    let reference = InMemoryReferenceData::new().with_standard_validity(StandardValidity {
        standard_code: 17,
        start_date: date(2017, 1, 1),
        end_date: None,
        last_new_start_date: Some(date(2018, 7, 31)),
    });
    let rule = LearnStartDate16::new(derived(reference));

    let mut programme = make_programme_aim(1, prog_type::APPRENTICESHIP_STANDARD, date(2018, 9, 1));
    programme.std_code = Some(17);
    let component = LearningDelivery {
        aim_seq_number: 2,
        aim_type: aim_type::COMPONENT_AIM,
        learn_start_date: date(2018, 10, 1),
        ..programme.clone()
    };
    let learner = make_learner(
        "LRN1",
        vec![programme, component, make_delivery(3, date(2018, 9, 1))],
    );

    let errors = run(&rule, &learner);

    assert_eq!(errors.len(), 2);
    for error in &errors {
        assert_eq!(error.parameter(param::LEARN_START_DATE), Some("01/09/2018"));
        assert_eq!(error.parameter(param::STD_CODE), Some("17"));
    }
}
