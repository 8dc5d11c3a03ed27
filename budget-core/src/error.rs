use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by the public engine operations.
///
/// Every variant is a rejected request: nothing is partially computed and
/// nothing is worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Yearly income must be strictly positive.
    #[error("invalid income amount: {0}")]
    InvalidIncome(Decimal),

    /// Amounts passed to the income converter must be strictly positive.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// The source cadence is not one of hourly, weekly, biweekly, monthly, yearly.
    #[error("invalid income type '{0}'")]
    UnknownCadence(String),

    /// Hours per week and weeks per year must both be positive.
    #[error("invalid work schedule: {hours_per_week} hours/week over {weeks_per_year} weeks/year")]
    InvalidWorkSchedule {
        hours_per_week: Decimal,
        weeks_per_year: Decimal,
    },
}

impl EngineError {
    /// All engine errors are invalid-input rejections; there are no
    /// transient failures.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

/// Errors raised while building policy tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("tax schedule has no brackets")]
    EmptySchedule,

    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotZero(Decimal),

    #[error("bracket {index} starts at {found}, expected {expected}")]
    NonContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    #[error("last bracket must be unbounded")]
    BoundedTopBracket,

    #[error("bracket {index} upper bound {max} does not exceed lower bound {min}")]
    InvertedBracket {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("county '{0}' has a negative tax rate")]
    NegativeCountyRate(String),

    #[error("county '{0}' has a non-positive housing multiplier")]
    InvalidHousingMultiplier(String),

    #[error("county '{0}' appears more than once")]
    DuplicateCounty(String),
}
