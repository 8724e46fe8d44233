//! Runs rules over learners.
//!
//! Learners are independent, so a submission is validated in parallel with
//! one learner per task. Within a learner, rules run in registration order.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use ilr_core::DerivedData;
use ilr_model::Learner;

use crate::error::{Result, ValidateError};
use crate::handler::{ErrorCollector, ValidationError, ValidationErrorHandler};
use crate::logging::redact_value;
use crate::rule::{Rule, Severity};

/// Ordered set of rules plus the derived-data services they read.
///
/// Cached derived facts live only as long as one learner's validation: the
/// engine drops a learner's entries from every service before and after
/// running its rules, however the rules were wired.
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
    derived: Vec<Arc<DerivedData>>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that also manages `derived`, for hosts that share it with
    /// code outside the registered rules.
    pub fn with_derived_data(derived: Arc<DerivedData>) -> Self {
        Self {
            rules: Vec::new(),
            derived: vec![derived],
        }
    }

    pub fn register(&mut self, rule: impl Rule + 'static) {
        if let Some(derived) = rule.derived_data() {
            self.track_derived_data(derived);
        }
        self.rules.push(Box::new(rule));
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.register(rule);
        self
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against one learner.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::EmptyLearnerReference`] if the learner has no
    /// reference; no rule runs in that case.
    pub fn validate_learner(
        &self,
        learner: &Learner,
        handler: &dyn ValidationErrorHandler,
    ) -> Result<()> {
        if learner.learn_ref_number.trim().is_empty() {
            return Err(ValidateError::EmptyLearnerReference { index: 0 });
        }
        self.run_rules(learner, handler);
        Ok(())
    }

    /// Validate a whole submission, returning every reported error.
    ///
    /// Errors come back grouped by learner in submission order, and in rule
    /// order within a learner, regardless of how the work was scheduled.
    ///
    /// # Errors
    ///
    /// Returns an error if any learner reference is empty or repeated.
    pub fn validate_submission(&self, learners: &[Learner]) -> Result<ValidationOutcome> {
        check_learner_references(learners)?;

        let errors: Vec<ValidationError> = learners
            .par_iter()
            .map(|learner| {
                let collector = ErrorCollector::new();
                self.run_rules(learner, &collector);
                collector.into_errors()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        let outcome = ValidationOutcome {
            learner_count: learners.len(),
            errors,
            severities: self.severities(),
        };

        tracing::info!(
            learners = outcome.learner_count,
            rules = self.rules.len(),
            errors = outcome.error_count(),
            warnings = outcome.warning_count(),
            "Submission validated"
        );
        Ok(outcome)
    }

    /// Validate a whole submission, streaming errors into a shared `handler`.
    ///
    /// Errors from different learners may interleave.
    ///
    /// # Errors
    ///
    /// Returns an error if any learner reference is empty or repeated.
    pub fn validate_submission_into(
        &self,
        learners: &[Learner],
        handler: &dyn ValidationErrorHandler,
    ) -> Result<()> {
        check_learner_references(learners)?;
        learners
            .par_iter()
            .for_each(|learner| self.run_rules(learner, handler));
        Ok(())
    }

    /// Number of distinct derived-data services the engine manages.
    pub fn derived_data_count(&self) -> usize {
        self.derived.len()
    }

    fn track_derived_data(&mut self, derived: &Arc<DerivedData>) {
        if !self.derived.iter().any(|known| Arc::ptr_eq(known, derived)) {
            self.derived.push(Arc::clone(derived));
        }
    }

    fn run_rules(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        let span = tracing::debug_span!(
            "learner",
            learner = redact_value(&learner.learn_ref_number)
        );
        let _guard = span.enter();

        self.forget_learner(learner);
        for rule in &self.rules {
            tracing::trace!(rule = rule.name(), "Running rule");
            rule.validate(learner, handler);
        }
        self.forget_learner(learner);
        tracing::debug!(
            deliveries = learner.learning_deliveries.len(),
            "Learner validated"
        );
    }

    fn forget_learner(&self, learner: &Learner) {
        for derived in &self.derived {
            derived.finish_learner(learner);
        }
    }

    fn severities(&self) -> BTreeMap<String, Severity> {
        self.rules
            .iter()
            .map(|rule| (rule.name().to_string(), rule.severity()))
            .collect()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .field("derived", &self.derived)
            .finish()
    }
}

fn check_learner_references(learners: &[Learner]) -> Result<()> {
    let mut seen = HashSet::with_capacity(learners.len());
    for (index, learner) in learners.iter().enumerate() {
        let reference = learner.learn_ref_number.trim();
        if reference.is_empty() {
            return Err(ValidateError::EmptyLearnerReference { index });
        }
        if !seen.insert(reference) {
            return Err(ValidateError::DuplicateLearnerReference(
                reference.to_string(),
            ));
        }
    }
    Ok(())
}

/// Errors reported for a submission, with rule severities for counting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub learner_count: usize,
    pub errors: Vec<ValidationError>,
    severities: BTreeMap<String, Severity>,
}

impl ValidationOutcome {
    /// Severity of the rule that reported `error`.
    pub fn severity_of(&self, error: &ValidationError) -> Severity {
        self.severities
            .get(&error.rule_name)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Count of errors (Error + Fail severity).
    pub fn error_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| matches!(self.severity_of(e), Severity::Error | Severity::Fail))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| self.severity_of(e) == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Errors reported for one learner.
    pub fn for_learner<'a>(
        &'a self,
        learn_ref_number: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.learn_ref_number == learn_ref_number)
    }

    /// Errors sorted Fail first, then Error, then Warning.
    pub fn sorted_by_severity(&self) -> Vec<&ValidationError> {
        let mut errors: Vec<_> = self.errors.iter().collect();
        errors.sort_by_key(|e| match self.severity_of(e) {
            Severity::Fail => 0,
            Severity::Error => 1,
            Severity::Warning => 2,
        });
        errors
    }
}
