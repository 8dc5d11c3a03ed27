//! County-adjusted housing ceiling and advisory tips.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::models::{HousingCostTable, Lookup};
use crate::tips::{HIGH_COST_HOUSING_TIPS, HOUSING_BASELINE_TIPS, LOW_INCOME_HOUSING_TIPS};

/// Share of monthly income used as the unadjusted housing target.
const BASE_SHARE: Decimal = dec!(0.30);
/// Hard ceiling on housing, whatever the county multiplier.
const MAX_SHARE: Decimal = dec!(0.40);
const RANGE_LOW: Decimal = dec!(0.8);
const RANGE_HIGH: Decimal = dec!(1.2);
/// Below this monthly income the affordability tips are added.
const LOW_INCOME_TIPS_BELOW: Decimal = dec!(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealRange {
    pub min: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingRecommendation {
    pub recommended_max: Decimal,
    pub ideal_range: IdealRange,
    pub county_factor: Decimal,
    pub tips: Vec<String>,
}

impl HousingRecommendation {
    /// Copy with money amounts rounded to cents. `county_factor` is a
    /// multiplier and is left as is.
    pub fn rounded(&self) -> Self {
        Self {
            recommended_max: round_half_up(self.recommended_max),
            ideal_range: IdealRange {
                min: round_half_up(self.ideal_range.min),
                max: round_half_up(self.ideal_range.max),
            },
            county_factor: self.county_factor,
            tips: self.tips.clone(),
        }
    }
}

/// Builds the housing recommendation for a monthly net income in `county`.
///
/// `recommended_max` applies the county multiplier and is capped at 40% of
/// income. `ideal_range` is taken from the unadjusted 30% base.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::PolicyTables;
/// use budget_core::calculations::housing::recommend_housing;
///
/// let policy = PolicyTables::default();
/// let rec = recommend_housing(dec!(5000), "Nowhereville", &policy.housing);
///
/// assert_eq!(rec.recommended_max, dec!(1500));
/// assert_eq!(rec.county_factor, dec!(1.0));
/// assert_eq!(rec.tips.len(), 3);
/// ```
pub fn recommend_housing(
    monthly_net_income: Decimal,
    county: &str,
    table: &HousingCostTable,
) -> HousingRecommendation {
    let base = monthly_net_income * BASE_SHARE;
    let multiplier = table.multiplier(county);
    if let Lookup::Defaulted(m) = multiplier {
        debug!(county, multiplier = %m, "county not in housing table; using default multiplier");
    }
    let county_factor = multiplier.value();

    let recommended_max = base
        .saturating_mul(county_factor)
        .min(monthly_net_income * MAX_SHARE);

    HousingRecommendation {
        recommended_max,
        ideal_range: IdealRange {
            min: base * RANGE_LOW,
            max: base * RANGE_HIGH,
        },
        county_factor,
        tips: housing_tips(monthly_net_income, county, table),
    }
}

/// Baseline tips, then high-cost county tips, then low-income tips.
pub fn housing_tips(
    monthly_net_income: Decimal,
    county: &str,
    table: &HousingCostTable,
) -> Vec<String> {
    let mut tips: Vec<String> = HOUSING_BASELINE_TIPS.iter().map(|t| t.to_string()).collect();

    if table.is_high_cost(county) {
        tips.extend(HIGH_COST_HOUSING_TIPS.iter().map(|t| t.to_string()));
    }
    if monthly_net_income < LOW_INCOME_TIPS_BELOW {
        tips.extend(LOW_INCOME_HOUSING_TIPS.iter().map(|t| t.to_string()));
    }

    tips
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::PolicyTables;

    fn table() -> HousingCostTable {
        PolicyTables::default().housing
    }

    #[test]
    fn los_angeles_applies_multiplier() {
        let rec = recommend_housing(dec!(3398.07), "Los Angeles", &table()).rounded();

        assert_eq!(rec.recommended_max, dec!(1121.36));
        assert_eq!(
            rec.ideal_range,
            IdealRange {
                min: dec!(815.54),
                max: dec!(1223.31),
            }
        );
        assert_eq!(rec.county_factor, dec!(1.1));
    }

    #[test]
    fn san_francisco_is_capped_at_forty_percent() {
        let rec = recommend_housing(dec!(10000), "San Francisco", &table());

        // 3000 × 1.4 = 4200 exceeds the 4000 cap
        assert_eq!(rec.recommended_max, dec!(4000));
        assert_eq!(rec.county_factor, dec!(1.4));
    }

    #[test]
    fn ideal_range_ignores_multiplier() {
        let rec = recommend_housing(dec!(10000), "San Francisco", &table());

        assert_eq!(
            rec.ideal_range,
            IdealRange {
                min: dec!(2400),
                max: dec!(3600),
            }
        );
    }

    #[test]
    fn unknown_county_uses_unit_multiplier() {
        let rec = recommend_housing(dec!(6000), "Nowhereville", &table());

        assert_eq!(rec.county_factor, dec!(1.0));
        assert_eq!(rec.recommended_max, dec!(1800));
    }

    #[test]
    fn baseline_tips_only() {
        let tips = housing_tips(dec!(6000), "Kern", &table());

        assert_eq!(tips, HOUSING_BASELINE_TIPS.to_vec());
    }

    #[test]
    fn high_cost_county_adds_tips_after_baseline() {
        let tips = housing_tips(dec!(6000), "San Mateo", &table());

        assert_eq!(tips.len(), 6);
        assert_eq!(tips[..3].to_vec(), HOUSING_BASELINE_TIPS.to_vec());
        assert_eq!(
            tips[3],
            "Consider house-hacking or finding roommates to reduce costs"
        );
    }

    #[test]
    fn low_income_high_cost_gets_all_nine_in_order() {
        let tips = housing_tips(dec!(3999.99), "Alameda", &table());

        assert_eq!(tips.len(), 9);
        assert_eq!(tips[3..6].to_vec(), HIGH_COST_HOUSING_TIPS.to_vec());
        assert_eq!(tips[6..].to_vec(), LOW_INCOME_HOUSING_TIPS.to_vec());
    }

    #[test]
    fn income_at_4000_gets_no_low_income_tips() {
        assert_eq!(housing_tips(dec!(4000), "Kern", &table()).len(), 3);
    }

    proptest! {
        #[test]
        fn recommended_max_never_exceeds_cap(
            cents in 0i64..10_000_000_00i64,
            factor in 100i64..300i64,
        ) {
            let table = HousingCostTable::new(
                vec![("Test".to_string(), Decimal::new(factor, 2))],
                Decimal::ONE,
                vec![],
            ).unwrap();
            let monthly = Decimal::new(cents, 2);
            let rec = recommend_housing(monthly, "Test", &table);

            prop_assert!(rec.recommended_max <= monthly * MAX_SHARE);
        }
    }
}
