//! Snapshot of the serialized error shape.

mod common;

use common::{academic_year, date, make_delivery, make_learner};
use ilr_validate::rules::{LearnActEndDate01, LearnStartDate02};
use ilr_validate::{RuleDates, RuleEngine};

#[test]
fn reported_errors_serialize_with_named_parameters() {
    let engine = RuleEngine::new()
        .with_rule(LearnStartDate02::new(&academic_year(), &RuleDates::default()))
        .with_rule(LearnActEndDate01);
    let mut delivery = make_delivery(3, date(2008, 7, 31));
    delivery.learn_act_end_date = Some(date(2008, 7, 1));
    let learner = make_learner("LRN0001", vec![delivery]);

    let outcome = engine.validate_submission(&[learner]).unwrap();

    insta::assert_json_snapshot!(outcome.errors, @r#"
    [
      {
        "rule_name": "LearnStartDate_02",
        "learn_ref_number": "LRN0001",
        "aim_sequence_number": 3,
        "parameters": [
          {
            "name": "LearnStartDate",
            "value": "31/07/2008"
          }
        ]
      },
      {
        "rule_name": "LearnActEndDate_01",
        "learn_ref_number": "LRN0001",
        "aim_sequence_number": 3,
        "parameters": [
          {
            "name": "LearnStartDate",
            "value": "31/07/2008"
          },
          {
            "name": "LearnActEndDate",
            "value": "01/07/2008"
          }
        ]
      }
    ]
    "#);
}
