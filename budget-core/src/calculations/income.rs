//! Pay-cadence conversion.
//!
//! Every input is first expressed as a yearly amount and the other
//! cadences are derived from it. Biweekly always uses 26 pay periods,
//! independent of the weeks worked per year.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::error::EngineError;

const MONTHS_PER_YEAR: i64 = 12;
const BIWEEKLY_PERIODS: i64 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayCadence {
    Hourly,
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl PayCadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl FromStr for PayCadence {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(EngineError::UnknownCadence(s.to_string())),
        }
    }
}

impl fmt::Display for PayCadence {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work-time assumptions behind hourly and weekly figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub hours_per_week: Decimal,
    pub weeks_per_year: Decimal,
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            hours_per_week: Decimal::from(40),
            weeks_per_year: Decimal::from(52),
        }
    }
}

impl WorkSchedule {
    fn invalid(&self) -> EngineError {
        EngineError::InvalidWorkSchedule {
            hours_per_week: self.hours_per_week,
            weeks_per_year: self.weeks_per_year,
        }
    }

    /// Hours worked in a year. Fails for non-positive inputs, and for
    /// products that overflow or round to zero.
    fn hours_per_year(&self) -> Result<Decimal, EngineError> {
        if self.hours_per_week <= Decimal::ZERO || self.weeks_per_year <= Decimal::ZERO {
            return Err(self.invalid());
        }
        self.hours_per_week
            .checked_mul(self.weeks_per_year)
            .filter(|hours| !hours.is_zero())
            .ok_or_else(|| self.invalid())
    }
}

/// One income expressed at every cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeConversion {
    pub yearly: Decimal,
    pub monthly: Decimal,
    pub hourly: Decimal,
    pub weekly: Decimal,
    pub biweekly: Decimal,
}

impl IncomeConversion {
    pub fn rounded(&self) -> Self {
        Self {
            yearly: round_half_up(self.yearly),
            monthly: round_half_up(self.monthly),
            hourly: round_half_up(self.hourly),
            weekly: round_half_up(self.weekly),
            biweekly: round_half_up(self.biweekly),
        }
    }
}

/// Converts `amount` paid at `from` into every cadence, at full precision.
///
/// This is where amounts and schedules are validated; callers pass them
/// through unchecked.
///
/// # Errors
///
/// [`EngineError::InvalidAmount`] for a non-positive amount, or one whose
/// yearly figure does not fit in a `Decimal`.
/// [`EngineError::InvalidWorkSchedule`] for non-positive hours or weeks.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::income::{PayCadence, WorkSchedule, convert_income};
///
/// let converted = convert_income(dec!(25), PayCadence::Hourly, WorkSchedule::default())
///     .unwrap()
///     .rounded();
///
/// assert_eq!(converted.yearly, dec!(52000.00));
/// assert_eq!(converted.monthly, dec!(4333.33));
/// assert_eq!(converted.biweekly, dec!(2000.00));
/// ```
pub fn convert_income(
    amount: Decimal,
    from: PayCadence,
    schedule: WorkSchedule,
) -> Result<IncomeConversion, EngineError> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount(amount));
    }
    let hours_per_year = schedule.hours_per_year()?;

    let months = Decimal::from(MONTHS_PER_YEAR);
    let periods = Decimal::from(BIWEEKLY_PERIODS);

    let yearly = match from {
        PayCadence::Hourly => amount.checked_mul(hours_per_year),
        PayCadence::Weekly => amount.checked_mul(schedule.weeks_per_year),
        PayCadence::Biweekly => amount.checked_mul(periods),
        PayCadence::Monthly => amount.checked_mul(months),
        PayCadence::Yearly => Some(amount),
    }
    .ok_or(EngineError::InvalidAmount(amount))?;

    // Tiny schedules can push the per-hour and per-week figures past the
    // `Decimal` range.
    let hourly = yearly
        .checked_div(hours_per_year)
        .ok_or_else(|| schedule.invalid())?;
    let weekly = yearly
        .checked_div(schedule.weeks_per_year)
        .ok_or_else(|| schedule.invalid())?;

    Ok(IncomeConversion {
        yearly,
        monthly: yearly / months,
        hourly,
        weekly,
        biweekly: yearly / periods,
    })
}
