//! Integration tests for loading policy tables from CSV directories.

use std::path::{Path, PathBuf};

use budget_core::{BudgetEngine, BudgetRequest, FilingStatus, PolicyError, PolicyTables};
use budget_data::{PolicyLoaderError, PolicyTableLoader};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_dir_reproduces_built_in_tables() {
    let loaded = PolicyTableLoader::load_dir(test_data_dir()).expect("Failed to load tables");
    let defaults = PolicyTables::default();

    assert_eq!(loaded.federal_single, defaults.federal_single);
    assert_eq!(loaded.federal_married, defaults.federal_married);
    assert_eq!(loaded.state, defaults.state);
    assert_eq!(loaded.deductions, defaults.deductions);
    assert_eq!(loaded.counties, defaults.counties);
    assert_eq!(loaded.payroll, defaults.payroll);
}

#[test]
fn test_load_dir_housing_table_matches_regardless_of_row_order() {
    let loaded = PolicyTableLoader::load_dir(test_data_dir()).expect("Failed to load tables");
    let defaults = PolicyTables::default();

    let mut loaded_multipliers = loaded.housing.multipliers().to_vec();
    let mut default_multipliers = defaults.housing.multipliers().to_vec();
    loaded_multipliers.sort();
    default_multipliers.sort();
    assert_eq!(loaded_multipliers, default_multipliers);

    let mut loaded_high_cost = loaded.housing.high_cost_counties().to_vec();
    let mut default_high_cost = defaults.housing.high_cost_counties().to_vec();
    loaded_high_cost.sort();
    default_high_cost.sort();
    assert_eq!(loaded_high_cost, default_high_cost);
}

#[test]
fn test_loaded_tables_produce_same_report() {
    let loaded = PolicyTableLoader::load_dir(test_data_dir()).expect("Failed to load tables");
    let request = BudgetRequest::new(dec!(85000))
        .with_filing_status(FilingStatus::Married)
        .with_county("Alameda");

    let from_csv = BudgetEngine::new(loaded)
        .compute_budget(&request)
        .expect("Failed to compute");
    let built_in = BudgetEngine::default()
        .compute_budget(&request)
        .expect("Failed to compute");

    assert_eq!(from_csv, built_in);
}

#[test]
fn test_partial_directory_keeps_built_in_schedules() {
    let loaded = PolicyTableLoader::load_dir(fixture_dir("high-tax")).expect("Failed to load");
    let defaults = PolicyTables::default();

    assert_eq!(loaded.federal_single, defaults.federal_single);
    assert_eq!(loaded.deductions, defaults.deductions);
    assert_eq!(loaded.counties.rates().len(), 2);
}

#[test]
fn test_custom_county_table_changes_report() {
    let loaded = PolicyTableLoader::load_dir(fixture_dir("high-tax")).expect("Failed to load");
    let engine = BudgetEngine::new(loaded);

    let la = engine
        .compute_budget(&BudgetRequest::new(dec!(50000)))
        .expect("Failed to compute");
    assert_eq!(la.taxes.county_tax, dec!(500.00));

    let mono = engine
        .compute_budget(&BudgetRequest::new(dec!(50000)).with_county("Mono"))
        .expect("Failed to compute");
    assert!(mono.county_recognized);
    assert_eq!(mono.housing_recommendations.county_factor, dec!(0.9));

    // San Francisco is no longer listed anywhere
    let sf = engine
        .compute_budget(&BudgetRequest::new(dec!(50000)).with_county("San Francisco"))
        .expect("Failed to compute");
    assert!(!sf.county_recognized);
    assert_eq!(sf.taxes.county_tax, dec!(75.00));
}

#[test]
fn test_invalid_bracket_rate_is_rejected() {
    let err = PolicyTableLoader::load_dir(fixture_dir("bad-brackets"))
        .expect_err("Should reject a rate above 1");

    match err {
        PolicyLoaderError::Policy(PolicyError::InvalidRate(rate)) => {
            assert_eq!(rate, dec!(1.5));
        }
        other => panic!("expected InvalidRate, got {other:?}"),
    }
}

#[test]
fn test_missing_directory_is_an_error() {
    let err = PolicyTableLoader::load_dir(fixture_dir("does-not-exist"))
        .expect_err("Should fail for a missing directory");

    assert!(matches!(err, PolicyLoaderError::NotADirectory(_)));
}
