//! Optional TOML configuration and its merge with command-line flags.
//!
//! Precedence is flag, then file, then built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use budget_core::FilingStatus;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contents of the configuration file. Every key is optional.
///
/// ```toml
/// tables_dir = "policy"
/// log_level = "debug"
/// default_county = "San Diego"
/// default_filing_status = "married"
/// hours_per_week = 37.5
/// weeks_per_year = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tables_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub default_county: Option<String>,
    pub default_filing_status: Option<FilingStatus>,
    pub hours_per_week: Option<Decimal>,
    pub weeks_per_year: Option<Decimal>,
}

impl Config {
    /// Reads and parses `path`. A relative `tables_dir` is resolved
    /// against the directory holding the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&raw)?;

        if let (Some(dir), Some(base)) = (&config.tables_dir, path.parent()) {
            if dir.is_relative() {
                config.tables_dir = Some(base.join(dir));
            }
        }

        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tables_dir: Option<PathBuf>,
    pub log_level: String,
    pub default_county: Option<String>,
    pub default_filing_status: Option<FilingStatus>,
    pub hours_per_week: Option<Decimal>,
    pub weeks_per_year: Option<Decimal>,
}

impl Settings {
    /// Merges global flags over the file. Per-command flags (county,
    /// filing status, schedule) are applied when the command runs.
    pub fn resolve(
        cli: &Cli,
        config: Config,
    ) -> Self {
        Self {
            tables_dir: cli.tables.clone().or(config.tables_dir),
            log_level: cli
                .log_level
                .clone()
                .or(config.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            default_county: config.default_county,
            default_filing_status: config.default_filing_status,
            hours_per_week: config.hours_per_week,
            weeks_per_year: config.weeks_per_year,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tables_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            default_county: None,
            default_filing_status: None,
            hours_per_week: None,
            weeks_per_year: None,
        }
    }
}
