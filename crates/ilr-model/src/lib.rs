//! Learner record types for funding validation.
//!
//! All records are constructed once per submission by the loading layer and
//! are read-only for the duration of validation.
//!
//! # Module Organization
//!
//! - [`learner`]: the learner aggregate
//! - [`delivery`]: learning deliveries, FAMs and financial records
//! - [`employment`]: employment statuses and their monitorings
//! - [`monitoring`]: typed monitoring types and composite keys
//! - [`reference`]: reference data (standards, contracts, eligibility, lookups)
//! - [`codes`]: named code values

pub mod codes;
pub mod delivery;
pub mod employment;
pub mod error;
pub mod learner;
pub mod monitoring;
pub mod reference;

pub use delivery::{AFinType, AppFinRecord, LearningDelivery, LearningDeliveryFam};
pub use employment::{EmploymentStatusMonitoring, LearnerEmploymentStatus};
pub use error::{ModelError, Result};
pub use learner::Learner;
pub use monitoring::{EsmKey, EsmType, FamKey, FamType};
pub use reference::{ContractAllocation, EligibilityRule, LookupType, LookupValue, StandardValidity};
