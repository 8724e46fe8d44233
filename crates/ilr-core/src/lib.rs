//! Temporal qualification and cross-entity resolution for learner validation.
//!
//! This crate holds the reusable computations every validation rule relies
//! on:
//!
//! - **Date intervals**: inclusive/exclusive window tests and calendar-year
//!   arithmetic ([`dates`], [`academic_year`])
//! - **Employment status resolution**: the status applicable on a date
//!   ([`employment`])
//! - **Delivery predicates**: funding model, programme type, FAM and
//!   monitoring membership ([`predicates`])
//! - **Derived data**: apprenticeship classification, linked programme start
//!   dates, contract latest starts, unemployment and benefit eligibility
//!   ([`derived`])
//! - **Reference data**: the lookup contract, an in-memory implementation and
//!   a CSV loader ([`lookup`], [`loader`])
//!
//! Nothing here mutates a learner record or performs I/O during validation.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ilr_core::employment::status_applicable_on;
//! use ilr_model::LearnerEmploymentStatus;
//!
//! let statuses = vec![
//!     LearnerEmploymentStatus {
//!         emp_stat: 10,
//!         date_emp_stat_app: NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(),
//!         ..Default::default()
//!     },
//!     LearnerEmploymentStatus {
//!         emp_stat: 11,
//!         date_emp_stat_app: NaiveDate::from_ymd_opt(2013, 6, 1).unwrap(),
//!         ..Default::default()
//!     },
//! ];
//!
//! let on = NaiveDate::from_ymd_opt(2013, 8, 1).unwrap();
//! assert_eq!(status_applicable_on(&statuses, on).map(|s| s.emp_stat), Some(11));
//! ```

pub mod academic_year;
pub mod cache;
pub mod config;
pub mod dates;
pub mod derived;
pub mod employment;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod predicates;

pub use academic_year::AcademicYear;
pub use cache::{DerivedDataCache, DerivedFact};
pub use config::DerivedDataConfig;
pub use dates::Boundary;
pub use derived::DerivedData;
pub use error::{CoreError, Result};
pub use loader::load_reference_data;
pub use lookup::{InMemoryReferenceData, ReferenceDataLookup};
pub use predicates::{MonitoringSet, ProgrammeClass};
