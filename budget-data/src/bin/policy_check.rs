use std::path::PathBuf;

use anyhow::{Context, Result};
use budget_data::PolicyTableLoader;
use budget_data::loader::{BRACKETS_FILE, COUNTIES_FILE, DEDUCTIONS_FILE};
use clap::Parser;

/// Validate a directory of policy table CSV files.
///
/// The directory may contain any of:
/// - brackets.csv: authority,filing_status,min_income,max_income,rate
/// - deductions.csv: authority,filing_status,amount
/// - counties.csv: county,tax_rate,housing_multiplier,high_cost
///
/// Files that are absent fall back to the built-in tables.
#[derive(Parser, Debug)]
#[command(name = "policy-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the policy CSV files
    #[arg(short, long)]
    dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Checking policy tables in: {}", args.dir.display());
    for file in [BRACKETS_FILE, DEDUCTIONS_FILE, COUNTIES_FILE] {
        let source = if args.dir.join(file).is_file() {
            "from directory"
        } else {
            "built-in"
        };
        println!("  {file}: {source}");
    }

    let tables = PolicyTableLoader::load_dir(&args.dir)
        .with_context(|| format!("Failed to load policy tables from: {}", args.dir.display()))?;

    println!(
        "Federal brackets: {} single, {} married",
        tables.federal_single.brackets().len(),
        tables.federal_married.brackets().len()
    );
    println!("State brackets: {}", tables.state.brackets().len());
    println!(
        "Counties: {} with surtax, {} with housing multiplier, {} high cost",
        tables.counties.rates().len(),
        tables.housing.multipliers().len(),
        tables.housing.high_cost_counties().len()
    );
    println!("Policy tables are valid.");

    Ok(())
}
