//! Tests for ilr-model types.

use chrono::NaiveDate;
use ilr_model::codes::prog_type;
use ilr_model::{
    AFinType, EsmType, FamType, Learner, LearningDelivery, LookupType, LookupValue,
    StandardValidity,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn learner_deserializes_from_record_field_names() {
    let json = r#"{
        "LearnRefNumber": "LRN001",
        "ULN": 1000000004,
        "DateOfBirth": "2000-02-29",
        "LearningDeliveries": [{
            "LearnAimRef": "ZPROG001",
            "AimType": 1,
            "AimSeqNumber": 1,
            "LearnStartDate": "2018-09-01",
            "LearnPlanEndDate": "2020-09-01",
            "FundModel": 36,
            "ProgType": 25,
            "StdCode": 17,
            "CompStatus": 1,
            "LearningDeliveryFAMs": [{ "LearnDelFAMType": "ACT", "LearnDelFAMCode": "1" }],
            "AppFinRecords": [{
                "AFinType": "TNP",
                "AFinCode": 1,
                "AFinDate": "2018-09-01",
                "AFinAmount": 9000
            }]
        }],
        "LearnerEmploymentStatuses": [{
            "EmpStat": 10,
            "DateEmpStatApp": "2018-08-01",
            "EmploymentStatusMonitorings": [{ "ESMType": "EII", "ESMCode": 4 }]
        }]
    }"#;

    let learner: Learner = serde_json::from_str(json).expect("deserialize learner");

    assert_eq!(learner.learn_ref_number, "LRN001");
    assert_eq!(learner.date_of_birth, Some(date(2000, 2, 29)));

    let delivery = learner.delivery(1).expect("aim 1");
    assert!(delivery.is_programme_aim());
    assert!(delivery.is_standard());
    assert_eq!(delivery.learning_delivery_fams[0].fam_type, FamType::Act);
    assert_eq!(delivery.app_fin_records[0].afin_type, AFinType::Tnp);
    assert!(delivery.con_ref_number.is_none());

    let status = &learner.learner_employment_statuses[0];
    assert_eq!(
        status.employment_status_monitorings[0].esm_type,
        EsmType::Eii
    );
}

#[test]
fn missing_collections_default_to_empty() {
    let json = r#"{ "LearnRefNumber": "LRN002", "ULN": 1 }"#;
    let learner: Learner = serde_json::from_str(json).expect("deserialize learner");

    assert!(learner.learning_deliveries.is_empty());
    assert!(learner.learner_employment_statuses.is_empty());
    assert!(learner.delivery(1).is_none());
}

#[test]
fn blank_contract_reference_is_absent() {
    let mut delivery = LearningDelivery {
        con_ref_number: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(delivery.contract_reference(), None);

    delivery.con_ref_number = Some(" ESF-2201 ".to_string());
    assert_eq!(delivery.contract_reference(), Some("ESF-2201"));
}

#[test]
fn standard_needs_programme_type_and_code() {
    let delivery = LearningDelivery {
        prog_type: Some(prog_type::APPRENTICESHIP_STANDARD),
        std_code: None,
        ..Default::default()
    };
    assert!(!delivery.is_standard());
}

#[test]
fn standard_last_start_date_prefers_earliest_closing_date() {
    let mut validity = StandardValidity {
        standard_code: 17,
        start_date: date(2017, 1, 1),
        end_date: Some(date(2020, 7, 31)),
        last_new_start_date: Some(date(2019, 7, 31)),
    };
    assert_eq!(validity.last_start_date(), Some(date(2019, 7, 31)));

    validity.last_new_start_date = None;
    assert_eq!(validity.last_start_date(), Some(date(2020, 7, 31)));

    validity.end_date = None;
    assert_eq!(validity.last_start_date(), None);
}

#[test]
fn lookup_type_parses_plain_and_qualified_forms() {
    assert_eq!("EmpStat".parse::<LookupType>().unwrap(), LookupType::EmpStat);
    assert_eq!(
        "LearnDelFAM.LDM".parse::<LookupType>().unwrap(),
        LookupType::LearnDelFam(FamType::Ldm)
    );
    assert_eq!(
        "esm.bsi".parse::<LookupType>().unwrap(),
        LookupType::EmploymentMonitoring(EsmType::Bsi)
    );
    assert!("ESM.XYZ".parse::<LookupType>().is_err());
    assert!("Nonsense".parse::<LookupType>().is_err());
}

#[test]
fn lookup_type_display_round_trips() {
    let lookup = LookupType::LearnDelFam(FamType::Sof);
    assert_eq!(lookup.to_string(), "LearnDelFAM.SOF");
    assert_eq!(lookup.to_string().parse::<LookupType>().unwrap(), lookup);
}

#[test]
fn lookup_value_validity_is_inclusive() {
    let value = LookupValue {
        code: "11".to_string(),
        valid_from: Some(date(2013, 8, 1)),
        valid_to: Some(date(2019, 7, 31)),
    };
    assert!(value.is_current(date(2013, 8, 1)));
    assert!(value.is_current(date(2019, 7, 31)));
    assert!(!value.is_current(date(2019, 8, 1)));
    assert!(!value.is_current(date(2013, 7, 31)));

    let open = LookupValue {
        code: "10".to_string(),
        valid_from: None,
        valid_to: None,
    };
    assert!(open.is_current(date(1990, 1, 1)));
}
