use std::path::PathBuf;

use budget_core::FilingStatus;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::utils::{parse_decimal, parse_filing_status};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal budget calculator for California residents.
///
/// Computes taxes and a monthly budget from a yearly salary, converts
/// income between pay cadences, and lists counties and budgeting tips.
/// Results are printed to stdout as JSON; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "budget", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of policy CSV files (brackets.csv, deductions.csv, counties.csv).
    #[arg(long, global = true)]
    pub tables: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). `RUST_LOG` takes precedence.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Taxes, monthly budget and housing guidance for a yearly income.
    Compute {
        /// Yearly gross income; commas are allowed (e.g. 85,000).
        #[arg(value_parser = parse_decimal, allow_hyphen_values = true)]
        income: Decimal,

        /// single or married.
        #[arg(long, value_parser = parse_filing_status)]
        filing_status: Option<FilingStatus>,

        /// California county, e.g. "San Francisco".
        #[arg(long)]
        county: Option<String>,
    },

    /// Express an income at every pay cadence.
    Convert {
        /// Income amount; commas are allowed.
        #[arg(value_parser = parse_decimal, allow_hyphen_values = true)]
        amount: Decimal,

        /// Cadence of the amount: hourly, weekly, biweekly, monthly or yearly.
        #[arg(long)]
        from: String,

        #[arg(long, value_parser = parse_decimal)]
        hours_per_week: Option<Decimal>,

        #[arg(long, value_parser = parse_decimal)]
        weeks_per_year: Option<Decimal>,
    },

    /// List counties with their surtax rates.
    Counties,

    /// Print the budgeting tips catalog.
    Tips,
}
