use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use budget_core::policy::{DEFAULT_COUNTY_TAX_RATE, DEFAULT_HOUSING_MULTIPLIER};
use budget_core::{
    BracketCeiling, CountyRate, CountyTaxTable, DeductionTable, FilingStatus, HousingCostTable,
    PolicyError, PolicyTables, StandardDeduction, TaxAuthority, TaxBracket, TaxSchedule,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const BRACKETS_FILE: &str = "brackets.csv";
pub const DEDUCTIONS_FILE: &str = "deductions.csv";
pub const COUNTIES_FILE: &str = "counties.csv";

/// Errors that can occur when loading policy tables.
#[derive(Debug, Error)]
pub enum PolicyLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown tax authority '{0}' (expected federal or state)")]
    UnknownAuthority(String),

    #[error("Unknown filing status '{0}' (expected single or married)")]
    UnknownFilingStatus(String),

    #[error("Row {row}: federal brackets need a filing status")]
    MissingFilingStatus { row: usize },

    #[error("Missing {authority} standard deduction for {filing_status}")]
    IncompleteDeductions {
        authority: TaxAuthority,
        filing_status: FilingStatus,
    },

    #[error("Duplicate {authority} standard deduction for {filing_status}")]
    DuplicateDeduction {
        authority: TaxAuthority,
        filing_status: FilingStatus,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Invalid policy table: {0}")]
    Policy(#[from] PolicyError),
}

impl From<csv::Error> for PolicyLoaderError {
    fn from(err: csv::Error) -> Self {
        PolicyLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from `brackets.csv`.
///
/// - `authority`: `federal` or `state`
/// - `filing_status`: `single` or `married`; empty for state rows, which
///   apply to every filing status
/// - `min_income`: lower edge of the bracket
/// - `max_income`: upper edge of the bracket (empty for unlimited)
/// - `rate`: marginal rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub authority: String,
    #[serde(default)]
    pub filing_status: Option<String>,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

/// A single record from `deductions.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeductionRecord {
    pub authority: String,
    pub filing_status: String,
    pub amount: Decimal,
}

/// A single record from `counties.csv`.
///
/// A county with an empty `tax_rate` is left out of the surtax table and
/// one with an empty `housing_multiplier` is left out of the housing
/// table, so both tables fall back to their defaults for it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CountyRecord {
    pub county: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub tax_rate: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub housing_multiplier: Option<Decimal>,
    #[serde(default)]
    pub high_cost: Option<bool>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// The three bracket schedules built from `brackets.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSchedules {
    pub federal_single: TaxSchedule,
    pub federal_married: TaxSchedule,
    pub state: TaxSchedule,
}

/// Loader for policy tables stored as CSV files.
///
/// Each `parse_*` function reads one file format from any `Read`; the
/// `build_*` functions turn parsed records into validated tables; and
/// [`PolicyTableLoader::load_dir`] does both for a directory.
pub struct PolicyTableLoader;

impl PolicyTableLoader {
    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<BracketRecord>, PolicyLoaderError> {
        parse_records(reader)
    }

    pub fn parse_deductions<R: Read>(
        reader: R
    ) -> Result<Vec<DeductionRecord>, PolicyLoaderError> {
        parse_records(reader)
    }

    pub fn parse_counties<R: Read>(reader: R) -> Result<Vec<CountyRecord>, PolicyLoaderError> {
        parse_records(reader)
    }

    /// Groups bracket rows into the federal single, federal married and
    /// state schedules, ordered by lower edge, and validates each one.
    pub fn build_schedules(
        records: &[BracketRecord]
    ) -> Result<BracketSchedules, PolicyLoaderError> {
        let mut single = Vec::new();
        let mut married = Vec::new();
        let mut state = Vec::new();

        for (i, record) in records.iter().enumerate() {
            let bracket = TaxBracket {
                min_income: record.min_income,
                max_income: record
                    .max_income
                    .map_or(BracketCeiling::Unbounded, BracketCeiling::Bounded),
                tax_rate: record.rate,
            };

            match parse_authority(&record.authority)? {
                TaxAuthority::State => state.push(bracket),
                TaxAuthority::Federal => {
                    // Header is line 1
                    let status = record
                        .filing_status
                        .as_deref()
                        .filter(|s| !s.trim().is_empty())
                        .ok_or(PolicyLoaderError::MissingFilingStatus { row: i + 2 })?;
                    match parse_filing_status(status)? {
                        FilingStatus::Single => single.push(bracket),
                        FilingStatus::Married => married.push(bracket),
                    }
                }
            }
        }

        for schedule in [&mut single, &mut married, &mut state] {
            schedule.sort_by_key(|b| b.min_income);
        }

        Ok(BracketSchedules {
            federal_single: TaxSchedule::new(single)?,
            federal_married: TaxSchedule::new(married)?,
            state: TaxSchedule::new(state)?,
        })
    }

    /// Builds the 2×2 deduction table. Every authority/status cell must be
    /// given exactly once.
    pub fn build_deductions(
        records: &[DeductionRecord]
    ) -> Result<DeductionTable, PolicyLoaderError> {
        // [federal, state] × [single, married]
        let mut cells: [[Option<Decimal>; 2]; 2] = [[None; 2]; 2];

        for record in records {
            let authority = parse_authority(&record.authority)?;
            let filing_status = parse_filing_status(&record.filing_status)?;
            let cell = &mut cells[authority_index(authority)][status_index(filing_status)];
            if cell.is_some() {
                return Err(PolicyLoaderError::DuplicateDeduction {
                    authority,
                    filing_status,
                });
            }
            *cell = Some(record.amount);
        }

        let amount = |authority: TaxAuthority, filing_status: FilingStatus| {
            cells[authority_index(authority)][status_index(filing_status)].ok_or(
                PolicyLoaderError::IncompleteDeductions {
                    authority,
                    filing_status,
                },
            )
        };

        Ok(DeductionTable {
            federal: StandardDeduction {
                single: amount(TaxAuthority::Federal, FilingStatus::Single)?,
                married: amount(TaxAuthority::Federal, FilingStatus::Married)?,
            },
            state: StandardDeduction {
                single: amount(TaxAuthority::State, FilingStatus::Single)?,
                married: amount(TaxAuthority::State, FilingStatus::Married)?,
            },
        })
    }

    /// Splits county rows into the surtax table and the housing table,
    /// keeping row order in both.
    pub fn build_county_tables(
        records: &[CountyRecord]
    ) -> Result<(CountyTaxTable, HousingCostTable), PolicyLoaderError> {
        let rates = records
            .iter()
            .filter_map(|r| {
                r.tax_rate.map(|tax_rate| CountyRate {
                    name: r.county.clone(),
                    tax_rate,
                })
            })
            .collect();
        let multipliers = records
            .iter()
            .filter_map(|r| r.housing_multiplier.map(|m| (r.county.clone(), m)))
            .collect();
        let high_cost = records
            .iter()
            .filter(|r| r.high_cost.unwrap_or(false))
            .map(|r| r.county.clone())
            .collect();

        Ok((
            CountyTaxTable::new(rates, DEFAULT_COUNTY_TAX_RATE)?,
            HousingCostTable::new(multipliers, DEFAULT_HOUSING_MULTIPLIER, high_cost)?,
        ))
    }

    /// Loads policy tables from `dir`.
    ///
    /// Starts from the built-in tables and replaces each one whose file is
    /// present: `brackets.csv`, `deductions.csv` and `counties.csv`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<PolicyTables, PolicyLoaderError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(PolicyLoaderError::NotADirectory(dir.to_path_buf()));
        }

        let mut tables = PolicyTables::default();

        let path = dir.join(BRACKETS_FILE);
        if let Some(file) = open_optional(&path)? {
            let records = Self::parse_brackets(file)?;
            let schedules = Self::build_schedules(&records)?;
            tables.federal_single = schedules.federal_single;
            tables.federal_married = schedules.federal_married;
            tables.state = schedules.state;
            info!(path = %path.display(), rows = records.len(), "loaded bracket schedules");
        } else {
            debug!(path = %path.display(), "no bracket file; keeping built-in schedules");
        }

        let path = dir.join(DEDUCTIONS_FILE);
        if let Some(file) = open_optional(&path)? {
            let records = Self::parse_deductions(file)?;
            tables.deductions = Self::build_deductions(&records)?;
            info!(path = %path.display(), rows = records.len(), "loaded standard deductions");
        } else {
            debug!(path = %path.display(), "no deduction file; keeping built-in deductions");
        }

        let path = dir.join(COUNTIES_FILE);
        if let Some(file) = open_optional(&path)? {
            let records = Self::parse_counties(file)?;
            let (counties, housing) = Self::build_county_tables(&records)?;
            tables.counties = counties;
            tables.housing = housing;
            info!(path = %path.display(), rows = records.len(), "loaded county tables");
        } else {
            debug!(path = %path.display(), "no county file; keeping built-in county tables");
        }

        Ok(tables)
    }
}

fn parse_records<R, T>(reader: R) -> Result<Vec<T>, PolicyLoaderError>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: T = result?;
        records.push(record);
    }

    Ok(records)
}

fn open_optional(path: &Path) -> Result<Option<File>, PolicyLoaderError> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(PolicyLoaderError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_authority(s: &str) -> Result<TaxAuthority, PolicyLoaderError> {
    TaxAuthority::parse(s).ok_or_else(|| PolicyLoaderError::UnknownAuthority(s.to_string()))
}

fn parse_filing_status(s: &str) -> Result<FilingStatus, PolicyLoaderError> {
    FilingStatus::parse(s).ok_or_else(|| PolicyLoaderError::UnknownFilingStatus(s.to_string()))
}

fn authority_index(authority: TaxAuthority) -> usize {
    match authority {
        TaxAuthority::Federal => 0,
        TaxAuthority::State => 1,
    }
}

fn status_index(filing_status: FilingStatus) -> usize {
    match filing_status {
        FilingStatus::Single => 0,
        FilingStatus::Married => 1,
    }
}
