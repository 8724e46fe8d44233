//! Error types for the rule engine.

use thiserror::Error;

/// Precondition failures raised before any rule runs.
///
/// These are programming-contract violations by the caller, not validation
/// findings; findings are reported through a
/// [`ValidationErrorHandler`](crate::ValidationErrorHandler).
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidateError {
    #[error("learner at position {index} has an empty learner reference")]
    EmptyLearnerReference { index: usize },

    #[error("learner reference appears more than once in the submission: {0}")]
    DuplicateLearnerReference(String),
}

/// Result type for rule engine operations.
pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_learner() {
        let err = ValidateError::DuplicateLearnerReference("LRN01".to_string());
        assert!(err.to_string().contains("LRN01"));

        let err = ValidateError::EmptyLearnerReference { index: 3 };
        assert!(err.to_string().contains("position 3"));
    }
}
