//! Error types for the derived-data layer.
//!
//! Data absence is never an error here; these cover construction of
//! calendar values and loading reference data from files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Academic year outside the representable date range.
    #[error("invalid academic year starting in {0}")]
    InvalidAcademicYear(i32),

    /// Reference data file not found.
    #[error("reference data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse a reference data CSV.
    #[error("failed to read reference data CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Invalid value in a reference data field.
    #[error("invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
