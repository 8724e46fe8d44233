//! The shared shape of a validation rule.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ilr_core::DerivedData;
use ilr_model::Learner;

use crate::handler::{ErrorParameter, ValidationErrorHandler};

/// Rule severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    /// Record is rejected outright
    Fail,
    /// Must be corrected
    #[default]
    Error,
    /// Should be reviewed
    Warning,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Some(Self::Fail),
            "error" | "e" => Some(Self::Error),
            "warning" | "w" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A single regulatory check over one learner.
///
/// Rules only read the learner and the shared derived-data layer. They hold
/// no mutable state, so one instance validates any number of learners
/// concurrently and rules never depend on each other's order.
///
/// Absent optional fields and empty collections mean the rule does not
/// apply; they are never reported as violations on their own.
pub trait Rule: Send + Sync {
    /// Stable identifier, e.g. `LearnStartDate_02`.
    fn name(&self) -> &'static str;

    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Derived-data service the rule reads from. The engine drops its
    /// cached facts for each learner it validates.
    fn derived_data(&self) -> Option<&Arc<DerivedData>> {
        None
    }

    /// Report every violating delivery, status or monitoring combination.
    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler);

    /// Report one violation under this rule's name.
    fn report(
        &self,
        handler: &dyn ValidationErrorHandler,
        learner: &Learner,
        aim_sequence_number: Option<i32>,
        parameters: Vec<ErrorParameter>,
    ) {
        handler.handle(
            self.name(),
            &learner.learn_ref_number,
            aim_sequence_number,
            parameters,
        );
    }
}
