use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::brackets::bracket_tax;
use crate::error::PolicyError;

/// Upper edge of a bracket. The top bracket is `Unbounded` rather than
/// carrying a sentinel amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketCeiling {
    Bounded(Decimal),
    Unbounded,
}

impl BracketCeiling {
    /// The smaller of `amount` and this ceiling.
    pub fn clamp(
        &self,
        amount: Decimal,
    ) -> Decimal {
        match self {
            Self::Bounded(max) => amount.min(*max),
            Self::Unbounded => amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: BracketCeiling,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub fn bounded(
        min_income: Decimal,
        max_income: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income: BracketCeiling::Bounded(max_income),
            tax_rate,
        }
    }

    pub fn unbounded(
        min_income: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income: BracketCeiling::Unbounded,
            tax_rate,
        }
    }
}

/// An ordered, contiguous bracket sequence for one tax authority.
///
/// Construction through [`TaxSchedule::new`] enforces the schedule shape:
/// the first bracket starts at zero, each bracket starts where the previous
/// one ends, and only the last bracket is unbounded.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::{TaxBracket, TaxSchedule};
///
/// let schedule = TaxSchedule::new(vec![
///     TaxBracket::bounded(dec!(0), dec!(10000), dec!(0.10)),
///     TaxBracket::unbounded(dec!(10000), dec!(0.20)),
/// ])
/// .unwrap();
///
/// assert_eq!(schedule.tax_on(dec!(15000)), dec!(2000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, PolicyError> {
        let first = brackets.first().ok_or(PolicyError::EmptySchedule)?;
        if first.min_income != Decimal::ZERO {
            return Err(PolicyError::FirstBracketNotZero(first.min_income));
        }

        let last_index = brackets.len() - 1;
        let mut expected_min = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(PolicyError::InvalidRate(bracket.tax_rate));
            }
            if bracket.min_income != expected_min {
                return Err(PolicyError::NonContiguous {
                    index,
                    expected: expected_min,
                    found: bracket.min_income,
                });
            }
            match bracket.max_income {
                BracketCeiling::Bounded(max) => {
                    if index == last_index {
                        return Err(PolicyError::BoundedTopBracket);
                    }
                    if max <= bracket.min_income {
                        return Err(PolicyError::InvertedBracket {
                            index,
                            min: bracket.min_income,
                            max,
                        });
                    }
                    expected_min = max;
                }
                BracketCeiling::Unbounded if index != last_index => {
                    return Err(PolicyError::UnboundedBeforeEnd(index));
                }
                BracketCeiling::Unbounded => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Built-in tables are checked by tests rather than at runtime.
    pub(crate) fn from_trusted(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Tax owed on a post-deduction amount.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        bracket_tax(&self.brackets, taxable_income)
    }
}
