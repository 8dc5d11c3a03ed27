//! Income-tier spending allocation.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Coarse classification of monthly net income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeTier {
    Low,
    Medium,
    High,
}

impl IncomeTier {
    /// Monthly net income below this is `Low`.
    pub const MEDIUM_FLOOR: Decimal = dec!(3000);
    /// Monthly net income at or above this is `High`.
    pub const HIGH_FLOOR: Decimal = dec!(8000);

    pub fn from_monthly(monthly_net_income: Decimal) -> Self {
        if monthly_net_income < Self::MEDIUM_FLOOR {
            Self::Low
        } else if monthly_net_income >= Self::HIGH_FLOOR {
            Self::High
        } else {
            Self::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Spending proportions for this tier.
    pub fn allocation(&self) -> &'static Allocation {
        match self {
            Self::Low => &Allocation::LOW,
            Self::Medium => &Allocation::MEDIUM,
            Self::High => &Allocation::HIGH,
        }
    }
}

impl fmt::Display for IncomeTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Housing,
    Transportation,
    Food,
    Utilities,
    Savings,
    Healthcare,
    Entertainment,
    Miscellaneous,
}

impl BudgetCategory {
    pub fn all() -> &'static [BudgetCategory] {
        &[
            BudgetCategory::Housing,
            BudgetCategory::Transportation,
            BudgetCategory::Food,
            BudgetCategory::Utilities,
            BudgetCategory::Savings,
            BudgetCategory::Healthcare,
            BudgetCategory::Entertainment,
            BudgetCategory::Miscellaneous,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Utilities => "utilities",
            Self::Savings => "savings",
            Self::Healthcare => "healthcare",
            Self::Entertainment => "entertainment",
            Self::Miscellaneous => "miscellaneous",
        }
    }
}

/// Share of monthly net income per category. Each tier's shares sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub housing: Decimal,
    pub transportation: Decimal,
    pub food: Decimal,
    pub utilities: Decimal,
    pub savings: Decimal,
    pub healthcare: Decimal,
    pub entertainment: Decimal,
    pub miscellaneous: Decimal,
}

impl Allocation {
    pub const LOW: Allocation = Allocation {
        housing: dec!(0.35),
        transportation: dec!(0.18),
        food: dec!(0.15),
        utilities: dec!(0.10),
        savings: dec!(0.10),
        healthcare: dec!(0.05),
        entertainment: dec!(0.03),
        miscellaneous: dec!(0.04),
    };

    pub const MEDIUM: Allocation = Allocation {
        housing: dec!(0.30),
        transportation: dec!(0.15),
        food: dec!(0.12),
        utilities: dec!(0.08),
        savings: dec!(0.20),
        healthcare: dec!(0.05),
        entertainment: dec!(0.05),
        miscellaneous: dec!(0.05),
    };

    pub const HIGH: Allocation = Allocation {
        housing: dec!(0.25),
        transportation: dec!(0.12),
        food: dec!(0.10),
        utilities: dec!(0.06),
        savings: dec!(0.30),
        healthcare: dec!(0.04),
        entertainment: dec!(0.08),
        miscellaneous: dec!(0.05),
    };

    pub fn share(
        &self,
        category: BudgetCategory,
    ) -> Decimal {
        match category {
            BudgetCategory::Housing => self.housing,
            BudgetCategory::Transportation => self.transportation,
            BudgetCategory::Food => self.food,
            BudgetCategory::Utilities => self.utilities,
            BudgetCategory::Savings => self.savings,
            BudgetCategory::Healthcare => self.healthcare,
            BudgetCategory::Entertainment => self.entertainment,
            BudgetCategory::Miscellaneous => self.miscellaneous,
        }
    }

    pub fn total(&self) -> Decimal {
        BudgetCategory::all().iter().map(|c| self.share(*c)).sum()
    }
}

/// Monthly amount per spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub housing: Decimal,
    pub transportation: Decimal,
    pub food: Decimal,
    pub utilities: Decimal,
    pub savings: Decimal,
    pub healthcare: Decimal,
    pub entertainment: Decimal,
    pub miscellaneous: Decimal,
}

impl BudgetBreakdown {
    pub fn amount(
        &self,
        category: BudgetCategory,
    ) -> Decimal {
        match category {
            BudgetCategory::Housing => self.housing,
            BudgetCategory::Transportation => self.transportation,
            BudgetCategory::Food => self.food,
            BudgetCategory::Utilities => self.utilities,
            BudgetCategory::Savings => self.savings,
            BudgetCategory::Healthcare => self.healthcare,
            BudgetCategory::Entertainment => self.entertainment,
            BudgetCategory::Miscellaneous => self.miscellaneous,
        }
    }

    pub fn total(&self) -> Decimal {
        BudgetCategory::all().iter().map(|c| self.amount(*c)).sum()
    }

    pub fn rounded(&self) -> Self {
        Self {
            housing: round_half_up(self.housing),
            transportation: round_half_up(self.transportation),
            food: round_half_up(self.food),
            utilities: round_half_up(self.utilities),
            savings: round_half_up(self.savings),
            healthcare: round_half_up(self.healthcare),
            entertainment: round_half_up(self.entertainment),
            miscellaneous: round_half_up(self.miscellaneous),
        }
    }
}

/// Splits monthly net income across the eight categories using the
/// proportions of its income tier.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::budget::allocate_budget;
///
/// let breakdown = allocate_budget(dec!(5000));
///
/// assert_eq!(breakdown.housing, dec!(1500));
/// assert_eq!(breakdown.savings, dec!(1000));
/// assert_eq!(breakdown.total(), dec!(5000));
/// ```
pub fn allocate_budget(monthly_net_income: Decimal) -> BudgetBreakdown {
    let shares = IncomeTier::from_monthly(monthly_net_income).allocation();

    BudgetBreakdown {
        housing: monthly_net_income * shares.housing,
        transportation: monthly_net_income * shares.transportation,
        food: monthly_net_income * shares.food,
        utilities: monthly_net_income * shares.utilities,
        savings: monthly_net_income * shares.savings,
        healthcare: monthly_net_income * shares.healthcare,
        entertainment: monthly_net_income * shares.entertainment,
        miscellaneous: monthly_net_income * shares.miscellaneous,
    }
}
