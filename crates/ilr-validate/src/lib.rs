//! Rule contract, error reporting and rule engine for learner validation.
//!
//! - [`Rule`]: the shape every rule implements
//! - [`ValidationErrorHandler`]: the sink rules report violations to
//! - [`RuleEngine`]: runs rules over one learner or a whole submission
//! - [`ValidationConfig`]: academic year, derived-data settings and rule
//!   thresholds
//! - [`rules`]: the individual rules
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ilr_core::{AcademicYear, InMemoryReferenceData};
//! use ilr_validate::rules::{EmpStat02, LearnStartDate02};
//! use ilr_validate::{RuleEngine, ValidationConfig};
//!
//! let year = AcademicYear::starting_in(2018).unwrap();
//! let config = ValidationConfig::for_academic_year(year);
//! let derived = Arc::new(config.derived_data(Arc::new(InMemoryReferenceData::new())));
//!
//! let engine = RuleEngine::with_derived_data(Arc::clone(&derived))
//!     .with_rule(EmpStat02::new(Arc::clone(&derived)))
//!     .with_rule(LearnStartDate02::new(&config.academic_year, &config.dates));
//!
//! let outcome = engine.validate_submission(&[]).unwrap();
//! assert!(outcome.is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod handler;
pub mod logging;
pub mod rule;
pub mod rules;

pub use config::{RuleDates, ValidationConfig, load_config};
pub use engine::{RuleEngine, ValidationOutcome};
pub use error::{Result, ValidateError};
pub use handler::{
    DisplayDate, DisplayOptional, ErrorCollector, ErrorParameter, ValidationError,
    ValidationErrorHandler, param,
};
pub use rule::{Rule, Severity};
