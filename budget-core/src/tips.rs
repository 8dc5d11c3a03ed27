//! Static advisory content.

use serde::Serialize;

/// Housing tips returned for every county and income.
pub const HOUSING_BASELINE_TIPS: [&str; 3] = [
    "Include utilities, parking, and renter's insurance in your housing budget",
    "Consider the total cost of commuting when choosing location",
    "Look for apartments with good public transit access to save on transportation",
];

/// Appended for counties in the high-cost set.
pub const HIGH_COST_HOUSING_TIPS: [&str; 3] = [
    "Consider house-hacking or finding roommates to reduce costs",
    "Look into suburbs with good transit connections to downtown",
    "Consider co-living spaces which can be more affordable",
];

/// Appended when monthly net income is below 4000.
pub const LOW_INCOME_HOUSING_TIPS: [&str; 3] = [
    "Look for rent-stabilized or affordable housing programs",
    "Consider shared housing options",
    "Prioritize neighborhoods with lower cost of living",
];

const HOUSING: &[&str] = &[
    "Keep housing costs at 30% or less of your monthly income in most CA counties",
    "In high-cost areas like SF and Silicon Valley, up to 35% may be necessary",
    "Include utilities, parking, and renter's insurance in your housing budget",
    "Research rent control laws in your city for tenant protections",
    "Consider house-hacking or roommates to reduce costs",
    "Look for apartments near public transit to save on transportation",
];

const TRANSPORTATION: &[&str] = &[
    "California has excellent public transportation in major cities",
    "Consider getting a monthly transit pass instead of driving daily",
    "If you must drive, budget for gas, insurance, maintenance, and parking",
    "Carpooling apps like Waze Carpool can reduce commute costs",
    "Electric vehicles may qualify for CA rebates and HOV lane access",
    "Bike-friendly cities like Davis and Berkeley can save money",
];

const FOOD: &[&str] = &[
    "California has year-round farmers markets with affordable fresh produce",
    "Shop at stores like Trader Joe's, Costco, or ethnic grocery stores for savings",
    "Meal prep on weekends to avoid expensive takeout during busy weekdays",
    "Take advantage of happy hour specials and restaurant week deals",
    "Consider CSA (Community Supported Agriculture) boxes for fresh, local produce",
    "Generic brands can save 20-30% on grocery bills",
];

const SAVINGS: &[&str] = &[
    "Build an emergency fund with 3-6 months expenses (CA cost of living is high)",
    "Take advantage of employer 401(k) matching - it's free money",
    "California has high taxes, so consider Roth IRA for tax-free growth",
    "Look into high-yield savings accounts for emergency funds",
    "Automate savings transfers to make it effortless",
    "Consider investing in index funds for long-term growth",
];

const UTILITIES: &[&str] = &[
    "California has tiered electricity rates - conserve during peak hours",
    "Solar panels may be cost-effective due to CA incentives and sunny weather",
    "Use programmable thermostats to save on heating/cooling costs",
    "Bundle internet, cable, and phone services for discounts",
    "Consider time-of-use electricity plans if you can shift usage",
    "Water conservation measures can significantly reduce bills",
];

const HEALTHCARE: &[&str] = &[
    "California has Covered California marketplace for health insurance",
    "Many employers offer HSA accounts - contribute pre-tax dollars",
    "Use urgent care instead of ER for non-emergency situations",
    "Look into community health centers for affordable care",
    "Consider telehealth options for routine consultations",
    "Preventive care is often covered 100% by insurance",
];

const ENTERTAINMENT: &[&str] = &[
    "Take advantage of California's free outdoor activities - beaches, hiking, parks",
    "Many museums have free days for residents",
    "Look for happy hour deals and early bird specials at restaurants",
    "Consider streaming services instead of cable TV",
    "Free events like outdoor concerts and festivals are common",
    "California libraries often have free events and classes",
];

const GENERAL: &[&str] = &[
    "California's cost of living varies dramatically by region - adjust expectations",
    "Track expenses for at least a month to understand spending patterns",
    "Use apps like Mint or YNAB to automate budget tracking",
    "Take advantage of California's strong consumer protection laws",
    "Consider side hustles - CA has a large gig economy",
    "Research local tax credits and deductions specific to California",
    "Plan for seasonal expenses like earthquake insurance or fire evacuation costs",
];

/// Every tip list, keyed by topic. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipsCatalog {
    pub housing_baseline: &'static [&'static str],
    pub housing: &'static [&'static str],
    pub transportation: &'static [&'static str],
    pub food: &'static [&'static str],
    pub savings: &'static [&'static str],
    pub utilities: &'static [&'static str],
    pub healthcare: &'static [&'static str],
    pub entertainment: &'static [&'static str],
    pub general: &'static [&'static str],
}

impl TipsCatalog {
    pub fn new() -> Self {
        Self {
            housing_baseline: &HOUSING_BASELINE_TIPS,
            housing: HOUSING,
            transportation: TRANSPORTATION,
            food: FOOD,
            savings: SAVINGS,
            utilities: UTILITIES,
            healthcare: HEALTHCARE,
            entertainment: ENTERTAINMENT,
            general: GENERAL,
        }
    }
}

impl Default for TipsCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn category_lists_have_six_tips() {
        let catalog = TipsCatalog::new();

        for list in [
            catalog.housing,
            catalog.transportation,
            catalog.food,
            catalog.savings,
            catalog.utilities,
            catalog.healthcare,
            catalog.entertainment,
        ] {
            assert_eq!(list.len(), 6);
        }
        assert_eq!(catalog.general.len(), 7);
    }

    #[test]
    fn baseline_matches_housing_recommender_tips() {
        assert_eq!(TipsCatalog::new().housing_baseline, &HOUSING_BASELINE_TIPS[..]);
    }

    #[test]
    fn serializes_in_declared_order() {
        let json = serde_json::to_string(&TipsCatalog::new()).unwrap();

        let baseline = json.find("\"housing_baseline\"").unwrap();
        let transport = json.find("\"transportation\"").unwrap();
        let general = json.find("\"general\"").unwrap();
        assert!(baseline < transport && transport < general);
    }
}
