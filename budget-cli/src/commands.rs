use anyhow::{Context, Result};
use budget_core::{BudgetEngine, BudgetRequest, ConversionRequest};
use budget_data::PolicyTableLoader;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::Command;
use crate::config::Settings;

/// Builds the engine from the configured tables directory, or the
/// built-in tables when none is set.
pub fn build_engine(settings: &Settings) -> Result<BudgetEngine> {
    match &settings.tables_dir {
        Some(dir) => {
            let tables = PolicyTableLoader::load_dir(dir).with_context(|| {
                format!("failed to load policy tables from '{}'", dir.display())
            })?;
            info!(dir = %dir.display(), "using policy tables from directory");
            Ok(BudgetEngine::new(tables))
        }
        None => {
            debug!("using built-in policy tables");
            Ok(BudgetEngine::default())
        }
    }
}

/// Runs one command and returns its pretty-printed JSON output.
pub fn run(
    command: &Command,
    engine: &BudgetEngine,
    settings: &Settings,
) -> Result<String> {
    match command {
        Command::Compute {
            income,
            filing_status,
            county,
        } => {
            let request = BudgetRequest {
                yearly_income: *income,
                filing_status: filing_status.or(settings.default_filing_status),
                county: county.clone().or_else(|| settings.default_county.clone()),
            };
            debug!(?request, "compute");
            let report = engine
                .compute_budget(&request)
                .context("budget computation failed")?;
            to_json(&report)
        }
        Command::Convert {
            amount,
            from,
            hours_per_week,
            weeks_per_year,
        } => {
            let request = ConversionRequest {
                amount: *amount,
                from: from.clone(),
                hours_per_week: hours_per_week.or(settings.hours_per_week),
                weeks_per_year: weeks_per_year.or(settings.weeks_per_year),
            };
            debug!(?request, "convert");
            let converted = engine
                .convert_income(&request)
                .context("income conversion failed")?;
            to_json(&converted)
        }
        Command::Counties => to_json(&engine.counties()),
        Command::Tips => to_json(&engine.tips()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
