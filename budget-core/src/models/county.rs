use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// County used when a caller does not supply one.
pub const DEFAULT_COUNTY: &str = "Los Angeles";

/// Outcome of a jurisdiction lookup.
///
/// Unrecognized counties are never an error; they resolve to the table's
/// default value and are reported as `Defaulted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    Known(T),
    Defaulted(T),
}

impl<T: Copy> Lookup<T> {
    pub fn value(&self) -> T {
        match self {
            Self::Known(v) | Self::Defaulted(v) => *v,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// One row of the county surtax table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRate {
    pub name: String,
    pub tax_rate: Decimal,
}

/// Flat county income-tax surtax, applied to gross income.
///
/// Rows keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountyTaxTable {
    rates: Vec<CountyRate>,
    default_rate: Decimal,
}

impl CountyTaxTable {
    pub fn new(
        rates: Vec<CountyRate>,
        default_rate: Decimal,
    ) -> Result<Self, PolicyError> {
        for (i, row) in rates.iter().enumerate() {
            if row.tax_rate < Decimal::ZERO {
                return Err(PolicyError::NegativeCountyRate(row.name.clone()));
            }
            if rates[..i].iter().any(|prev| prev.name == row.name) {
                return Err(PolicyError::DuplicateCounty(row.name.clone()));
            }
        }
        Ok(Self {
            rates,
            default_rate,
        })
    }

    pub(crate) fn from_trusted(
        rates: Vec<CountyRate>,
        default_rate: Decimal,
    ) -> Self {
        Self {
            rates,
            default_rate,
        }
    }

    pub fn rates(&self) -> &[CountyRate] {
        &self.rates
    }

    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    pub fn tax_rate(
        &self,
        county: &str,
    ) -> Lookup<Decimal> {
        self.rates
            .iter()
            .find(|row| row.name == county)
            .map_or(Lookup::Defaulted(self.default_rate), |row| {
                Lookup::Known(row.tax_rate)
            })
    }
}

/// Housing-cost multipliers and the set of high-cost counties.
///
/// Independent of [`CountyTaxTable`]: a county may appear in one and not
/// the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HousingCostTable {
    multipliers: Vec<(String, Decimal)>,
    default_multiplier: Decimal,
    high_cost: Vec<String>,
}

impl HousingCostTable {
    pub fn new(
        multipliers: Vec<(String, Decimal)>,
        default_multiplier: Decimal,
        high_cost: Vec<String>,
    ) -> Result<Self, PolicyError> {
        for (i, (name, multiplier)) in multipliers.iter().enumerate() {
            if *multiplier <= Decimal::ZERO {
                return Err(PolicyError::InvalidHousingMultiplier(name.clone()));
            }
            if multipliers[..i].iter().any(|(prev, _)| prev == name) {
                return Err(PolicyError::DuplicateCounty(name.clone()));
            }
        }
        Ok(Self {
            multipliers,
            default_multiplier,
            high_cost,
        })
    }

    pub(crate) fn from_trusted(
        multipliers: Vec<(String, Decimal)>,
        default_multiplier: Decimal,
        high_cost: Vec<String>,
    ) -> Self {
        Self {
            multipliers,
            default_multiplier,
            high_cost,
        }
    }

    pub fn multipliers(&self) -> &[(String, Decimal)] {
        &self.multipliers
    }

    pub fn high_cost_counties(&self) -> &[String] {
        &self.high_cost
    }

    pub fn multiplier(
        &self,
        county: &str,
    ) -> Lookup<Decimal> {
        self.multipliers
            .iter()
            .find(|(name, _)| name == county)
            .map_or(Lookup::Defaulted(self.default_multiplier), |(_, m)| {
                Lookup::Known(*m)
            })
    }

    pub fn is_high_cost(
        &self,
        county: &str,
    ) -> bool {
        self.high_cost.iter().any(|name| name == county)
    }
}
