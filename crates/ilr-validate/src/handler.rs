//! Error reporting contract.
//!
//! Rules never build output themselves. On a failing condition they hand the
//! rule name, learner reference, optional aim sequence number and a list of
//! named parameters to a [`ValidationErrorHandler`]. Reporting is
//! fire-and-forget from the rule's point of view.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::logging::redact_value;

/// Parameter names used in reported errors.
///
/// Names follow the field names of the learner record so downstream message
/// formatting can look them up.
pub mod param {
    pub const AFIN_CODE: &str = "AFinCode";
    pub const AFIN_DATE: &str = "AFinDate";
    pub const AFIN_TYPE: &str = "AFinType";
    pub const AIM_TYPE: &str = "AimType";
    pub const CON_REF_NUMBER: &str = "ConRefNumber";
    pub const DATE_EMP_STAT_APP: &str = "DateEmpStatApp";
    pub const DATE_OF_BIRTH: &str = "DateOfBirth";
    pub const EMP_STAT: &str = "EmpStat";
    pub const ESM_CODE: &str = "ESMCode";
    pub const ESM_TYPE: &str = "ESMType";
    pub const FUND_MODEL: &str = "FundModel";
    pub const LEARN_ACT_END_DATE: &str = "LearnActEndDate";
    pub const LEARN_PLAN_END_DATE: &str = "LearnPlanEndDate";
    pub const LEARN_START_DATE: &str = "LearnStartDate";
    pub const ORIG_LEARN_START_DATE: &str = "OrigLearnStartDate";
    pub const PROG_TYPE: &str = "ProgType";
    pub const STD_CODE: &str = "StdCode";
}

/// A named value describing an offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorParameter {
    pub name: String,
    pub value: String,
}

impl ErrorParameter {
    pub fn new(name: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Displays a date as `dd/mm/yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDate(pub NaiveDate);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

/// Displays an optional value, or nothing when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptional<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for DisplayOptional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

/// One reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub rule_name: String,
    pub learn_ref_number: String,
    pub aim_sequence_number: Option<i32>,
    pub parameters: Vec<ErrorParameter>,
}

impl ValidationError {
    /// Value of the named parameter, if reported.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|parameter| parameter.name == name)
            .map(|parameter| parameter.value.as_str())
    }
}

/// Sink that rules report violations to.
///
/// Implementations must tolerate concurrent calls: the engine validates
/// learners in parallel against a single shared handler.
pub trait ValidationErrorHandler: Send + Sync {
    fn handle(
        &self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_sequence_number: Option<i32>,
        parameters: Vec<ErrorParameter>,
    );

    fn build_parameter(&self, name: &str, value: &dyn fmt::Display) -> ErrorParameter {
        ErrorParameter::new(name, value)
    }
}

/// Handler that keeps every reported error in arrival order.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Mutex<Vec<ValidationError>>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the errors collected so far.
    pub fn snapshot(&self) -> Vec<ValidationError> {
        self.lock().clone()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ValidationError>> {
        self.errors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ValidationErrorHandler for ErrorCollector {
    fn handle(
        &self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_sequence_number: Option<i32>,
        parameters: Vec<ErrorParameter>,
    ) {
        tracing::trace!(
            rule = rule_name,
            learner = redact_value(learn_ref_number),
            aim_seq = ?aim_sequence_number,
            parameters = parameters.len(),
            "Validation error reported"
        );
        self.lock().push(ValidationError {
            rule_name: rule_name.to_string(),
            learn_ref_number: learn_ref_number.to_string(),
            aim_sequence_number,
            parameters,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2018, 8, 1).unwrap();
        assert_eq!(DisplayDate(date).to_string(), "01/08/2018");
    }

    #[test]
    fn absent_values_render_empty() {
        assert_eq!(DisplayOptional::<i32>(None).to_string(), "");
        assert_eq!(DisplayOptional(Some(25)).to_string(), "25");
    }

    #[test]
    fn collector_keeps_arrival_order() {
        let collector = ErrorCollector::new();
        let parameter = collector.build_parameter(param::FUND_MODEL, &36);
        collector.handle("Rule_01", "LRN1", Some(1), vec![parameter]);
        collector.handle("Rule_02", "LRN1", None, Vec::new());

        let errors = collector.into_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].rule_name, "Rule_01");
        assert_eq!(errors[0].parameter(param::FUND_MODEL), Some("36"));
        assert_eq!(errors[1].aim_sequence_number, None);
    }
}
