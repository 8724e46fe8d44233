//! CSV loading of reference data.
//!
//! Each table lives in its own file inside a reference data directory. Dates
//! are ISO 8601 (`YYYY-MM-DD`); empty cells are absent values. A table whose
//! file is missing is left empty.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use ilr_model::{ContractAllocation, EligibilityRule, LookupType, LookupValue, StandardValidity};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, Result};
use crate::lookup::InMemoryReferenceData;

pub const STANDARDS_FILE: &str = "standards.csv";
pub const CONTRACTS_FILE: &str = "contract_allocations.csv";
pub const ELIGIBILITY_RULES_FILE: &str = "eligibility_rules.csv";
pub const LOOKUPS_FILE: &str = "lookups.csv";

#[derive(Debug, Deserialize)]
struct StandardRow {
    #[serde(rename = "StandardCode")]
    standard_code: i32,
    #[serde(rename = "StartDate")]
    start_date: NaiveDate,
    #[serde(rename = "EndDate")]
    end_date: Option<NaiveDate>,
    #[serde(rename = "LastNewStartDate")]
    last_new_start_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct ContractRow {
    #[serde(rename = "ContractAllocationNumber")]
    contract_allocation_number: String,
    #[serde(rename = "StartDate")]
    start_date: NaiveDate,
    #[serde(rename = "EndDate")]
    end_date: Option<NaiveDate>,
    #[serde(rename = "StopNewStartsFromDate")]
    stop_new_starts_from_date: Option<NaiveDate>,
    #[serde(rename = "FundingStreamPeriodCode", default)]
    funding_stream_period_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EligibilityRow {
    #[serde(rename = "ContractAllocationNumber")]
    contract_allocation_number: String,
    #[serde(rename = "MinLengthOfUnemployment")]
    min_length_of_unemployment: Option<i32>,
    #[serde(rename = "MaxLengthOfUnemployment")]
    max_length_of_unemployment: Option<i32>,
    #[serde(rename = "Benefits", default)]
    benefits: String,
    #[serde(rename = "MinAge", default)]
    min_age: Option<i32>,
    #[serde(rename = "MaxAge", default)]
    max_age: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct LookupRow {
    #[serde(rename = "LookupType")]
    lookup_type: String,
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "ValidFrom")]
    valid_from: Option<NaiveDate>,
    #[serde(rename = "ValidTo")]
    valid_to: Option<NaiveDate>,
}

/// Load every reference table found in `dir`.
///
/// # Errors
///
/// Returns an error if `dir` does not exist or a present file fails to parse.
pub fn load_reference_data(dir: &Path) -> Result<InMemoryReferenceData> {
    if !dir.is_dir() {
        return Err(CoreError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut data = InMemoryReferenceData::new();

    if let Some(rows) = read_file(&dir.join(STANDARDS_FILE), read_standards)? {
        for validity in rows {
            data.add_standard_validity(validity);
        }
    }

    if let Some(rows) = read_file(&dir.join(CONTRACTS_FILE), read_contract_allocations)? {
        for allocation in rows {
            let number = allocation.contract_allocation_number.clone();
            if data.add_contract_allocation(allocation).is_some() {
                tracing::warn!(
                    contract_allocation_number = %number,
                    "Duplicate contract allocation; keeping the last row"
                );
            }
        }
    }

    if let Some(rows) = read_file(&dir.join(ELIGIBILITY_RULES_FILE), read_eligibility_rules)? {
        for rule in rows {
            let number = rule.contract_allocation_number.clone();
            if data.add_eligibility_rule(rule).is_some() {
                tracing::warn!(
                    contract_allocation_number = %number,
                    "Duplicate eligibility rule; keeping the last row"
                );
            }
        }
    }

    if let Some(rows) = read_file(&dir.join(LOOKUPS_FILE), read_lookup_values)? {
        for (lookup_type, value) in rows {
            data.add_lookup_value(lookup_type, value);
        }
    }

    tracing::debug!(
        dir = %dir.display(),
        standards = data.standard_count(),
        contracts = data.contract_count(),
        eligibility_rules = data.eligibility_rule_count(),
        "Loaded reference data"
    );

    Ok(data)
}

/// Read standard validity windows.
pub fn read_standards<R: Read>(reader: R, source: &Path) -> Result<Vec<StandardValidity>> {
    let rows: Vec<StandardRow> = read_rows(reader, source)?;
    Ok(rows
        .into_iter()
        .map(|row| StandardValidity {
            standard_code: row.standard_code,
            start_date: row.start_date,
            end_date: row.end_date,
            last_new_start_date: row.last_new_start_date,
        })
        .collect())
}

/// Read contract allocations.
pub fn read_contract_allocations<R: Read>(
    reader: R,
    source: &Path,
) -> Result<Vec<ContractAllocation>> {
    let rows: Vec<ContractRow> = read_rows(reader, source)?;
    Ok(rows
        .into_iter()
        .map(|row| ContractAllocation {
            contract_allocation_number: row.contract_allocation_number.trim().to_string(),
            start_date: row.start_date,
            end_date: row.end_date,
            stop_new_starts_from_date: row.stop_new_starts_from_date,
            funding_stream_period_code: row
                .funding_stream_period_code
                .filter(|code| !code.trim().is_empty()),
        })
        .collect())
}

/// Read contract eligibility rules.
pub fn read_eligibility_rules<R: Read>(reader: R, source: &Path) -> Result<Vec<EligibilityRule>> {
    let rows: Vec<EligibilityRow> = read_rows(reader, source)?;
    rows.into_iter()
        .map(|row| {
            let benefits = parse_flag(&row.benefits).ok_or_else(|| CoreError::InvalidValue {
                field: "Benefits",
                value: row.benefits.clone(),
                file: source.to_path_buf(),
            })?;
            Ok(EligibilityRule {
                contract_allocation_number: row.contract_allocation_number.trim().to_string(),
                min_length_of_unemployment: row.min_length_of_unemployment,
                max_length_of_unemployment: row.max_length_of_unemployment,
                benefits,
                min_age: row.min_age,
                max_age: row.max_age,
            })
        })
        .collect()
}

/// Read lookup values with their lookup table.
pub fn read_lookup_values<R: Read>(
    reader: R,
    source: &Path,
) -> Result<Vec<(LookupType, LookupValue)>> {
    let rows: Vec<LookupRow> = read_rows(reader, source)?;
    rows.into_iter()
        .map(|row| {
            let lookup_type =
                row.lookup_type
                    .parse::<LookupType>()
                    .map_err(|_| CoreError::InvalidValue {
                        field: "LookupType",
                        value: row.lookup_type.clone(),
                        file: source.to_path_buf(),
                    })?;
            Ok((
                lookup_type,
                LookupValue {
                    code: row.code.trim().to_string(),
                    valid_from: row.valid_from,
                    valid_to: row.valid_to,
                },
            ))
        })
        .collect()
}

fn read_file<T>(
    path: &Path,
    read: impl FnOnce(File, &Path) -> Result<Vec<T>>,
) -> Result<Option<Vec<T>>> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "Reference data file not found; table left empty");
        return Ok(None);
    }
    let file = File::open(path).map_err(|e| CoreError::CsvRead {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    read(file, path).map(Some)
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R, source: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<T>()
        .map(|row| {
            row.map_err(|e| CoreError::CsvRead {
                path: source.to_path_buf(),
                source: e,
            })
        })
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "n" | "no" => Some(false),
        "1" | "true" | "y" | "yes" => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("Y"), Some(true));
        assert_eq!(parse_flag(" true "), Some(true));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
