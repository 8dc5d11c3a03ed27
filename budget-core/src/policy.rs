//! Immutable rate tables consulted by every calculation.
//!
//! The built-in tables cover 2023 federal brackets, the California
//! schedule, and a California county surtax/housing table. A
//! [`PolicyTables`] value is built once at start-up and shared read-only.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::{
    CountyRate, CountyTaxTable, DeductionTable, FilingStatus, HousingCostTable, PayrollConfig,
    StandardDeduction, TaxBracket, TaxSchedule,
};

/// County surtax applied when a county is not in the table.
pub const DEFAULT_COUNTY_TAX_RATE: Decimal = dec!(0.0015);
/// Housing multiplier applied when a county is not in the table.
pub const DEFAULT_HOUSING_MULTIPLIER: Decimal = dec!(1.0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyTables {
    pub federal_single: TaxSchedule,
    pub federal_married: TaxSchedule,
    pub state: TaxSchedule,
    pub deductions: DeductionTable,
    pub counties: CountyTaxTable,
    pub housing: HousingCostTable,
    pub payroll: PayrollConfig,
}

impl PolicyTables {
    pub fn federal_schedule(
        &self,
        filing_status: FilingStatus,
    ) -> &TaxSchedule {
        match filing_status {
            FilingStatus::Single => &self.federal_single,
            FilingStatus::Married => &self.federal_married,
        }
    }
}

impl Default for PolicyTables {
    fn default() -> Self {
        Self {
            federal_single: TaxSchedule::from_trusted(federal_single_brackets()),
            federal_married: TaxSchedule::from_trusted(federal_married_brackets()),
            state: TaxSchedule::from_trusted(state_brackets()),
            deductions: default_deductions(),
            counties: default_county_taxes(),
            housing: default_housing_costs(),
            payroll: default_payroll(),
        }
    }
}

pub fn federal_single_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::bounded(dec!(0), dec!(11000), dec!(0.10)),
        TaxBracket::bounded(dec!(11000), dec!(44725), dec!(0.12)),
        TaxBracket::bounded(dec!(44725), dec!(95375), dec!(0.22)),
        TaxBracket::bounded(dec!(95375), dec!(182050), dec!(0.24)),
        TaxBracket::bounded(dec!(182050), dec!(231250), dec!(0.32)),
        TaxBracket::bounded(dec!(231250), dec!(578125), dec!(0.35)),
        TaxBracket::unbounded(dec!(578125), dec!(0.37)),
    ]
}

pub fn federal_married_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::bounded(dec!(0), dec!(22000), dec!(0.10)),
        TaxBracket::bounded(dec!(22000), dec!(89450), dec!(0.12)),
        TaxBracket::bounded(dec!(89450), dec!(190750), dec!(0.22)),
        TaxBracket::bounded(dec!(190750), dec!(364200), dec!(0.24)),
        TaxBracket::bounded(dec!(364200), dec!(462500), dec!(0.32)),
        TaxBracket::bounded(dec!(462500), dec!(693750), dec!(0.35)),
        TaxBracket::unbounded(dec!(693750), dec!(0.37)),
    ]
}

/// California schedule; shared by both filing statuses.
pub fn state_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::bounded(dec!(0), dec!(10756), dec!(0.01)),
        TaxBracket::bounded(dec!(10756), dec!(25499), dec!(0.02)),
        TaxBracket::bounded(dec!(25499), dec!(40245), dec!(0.04)),
        TaxBracket::bounded(dec!(40245), dec!(55866), dec!(0.06)),
        TaxBracket::bounded(dec!(55866), dec!(70606), dec!(0.08)),
        TaxBracket::bounded(dec!(70606), dec!(360659), dec!(0.093)),
        TaxBracket::bounded(dec!(360659), dec!(432787), dec!(0.103)),
        TaxBracket::bounded(dec!(432787), dec!(721314), dec!(0.113)),
        TaxBracket::bounded(dec!(721314), dec!(1000000), dec!(0.123)),
        TaxBracket::unbounded(dec!(1000000), dec!(0.133)),
    ]
}

pub fn default_deductions() -> DeductionTable {
    DeductionTable {
        federal: StandardDeduction {
            single: dec!(14600),
            married: dec!(29200),
        },
        state: StandardDeduction {
            single: dec!(5540),
            married: dec!(11080),
        },
    }
}

const COUNTY_TAX_RATES: [(&str, Decimal); 15] = [
    ("Los Angeles", dec!(0.0025)),
    ("San Francisco", dec!(0.0038)),
    ("San Diego", dec!(0.0015)),
    ("Orange", dec!(0.0020)),
    ("Sacramento", dec!(0.0018)),
    ("Riverside", dec!(0.0012)),
    ("Alameda", dec!(0.0028)),
    ("Santa Clara", dec!(0.0035)),
    ("Fresno", dec!(0.0015)),
    ("Kern", dec!(0.0010)),
    ("San Bernardino", dec!(0.0012)),
    ("Ventura", dec!(0.0022)),
    ("Contra Costa", dec!(0.0025)),
    ("Santa Barbara", dec!(0.0020)),
    ("Solano", dec!(0.0018)),
];

const HOUSING_MULTIPLIERS: [(&str, Decimal); 10] = [
    ("San Francisco", dec!(1.4)),
    ("Santa Clara", dec!(1.3)),
    ("San Mateo", dec!(1.35)),
    ("Alameda", dec!(1.2)),
    ("Orange", dec!(1.15)),
    ("Los Angeles", dec!(1.1)),
    ("San Diego", dec!(1.1)),
    ("Ventura", dec!(1.05)),
    ("Contra Costa", dec!(1.1)),
    ("Santa Barbara", dec!(1.1)),
];

const HIGH_COST_COUNTIES: [&str; 4] = ["San Francisco", "Santa Clara", "San Mateo", "Alameda"];

pub fn default_county_taxes() -> CountyTaxTable {
    let rates = COUNTY_TAX_RATES
        .iter()
        .map(|(name, rate)| CountyRate {
            name: name.to_string(),
            tax_rate: *rate,
        })
        .collect();
    CountyTaxTable::from_trusted(rates, DEFAULT_COUNTY_TAX_RATE)
}

pub fn default_housing_costs() -> HousingCostTable {
    let multipliers = HOUSING_MULTIPLIERS
        .iter()
        .map(|(name, m)| (name.to_string(), *m))
        .collect();
    let high_cost = HIGH_COST_COUNTIES.iter().map(|c| c.to_string()).collect();
    HousingCostTable::from_trusted(multipliers, DEFAULT_HOUSING_MULTIPLIER, high_cost)
}

pub fn default_payroll() -> PayrollConfig {
    PayrollConfig {
        ss_wage_base: dec!(160200),
        ss_tax_rate: dec!(0.062),
        medicare_tax_rate: dec!(0.0145),
        additional_medicare_rate: dec!(0.009),
        additional_medicare_threshold_single: dec!(200000),
        additional_medicare_threshold_married: dec!(250000),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::BracketCeiling;

    #[test]
    fn built_in_schedules_are_valid() {
        for brackets in [
            federal_single_brackets(),
            federal_married_brackets(),
            state_brackets(),
        ] {
            assert!(TaxSchedule::new(brackets).is_ok());
        }
    }

    #[test]
    fn built_in_county_tables_are_valid() {
        let defaults = PolicyTables::default();

        assert_eq!(
            CountyTaxTable::new(defaults.counties.rates().to_vec(), DEFAULT_COUNTY_TAX_RATE),
            Ok(defaults.counties.clone())
        );
        assert_eq!(
            HousingCostTable::new(
                defaults.housing.multipliers().to_vec(),
                DEFAULT_HOUSING_MULTIPLIER,
                defaults.housing.high_cost_counties().to_vec(),
            ),
            Ok(defaults.housing.clone())
        );
    }

    #[test]
    fn state_schedule_has_ten_brackets() {
        assert_eq!(PolicyTables::default().state.brackets().len(), 10);
    }

    #[test]
    fn federal_schedule_follows_filing_status() {
        let policy = PolicyTables::default();

        assert_eq!(
            policy.federal_schedule(FilingStatus::Married).brackets()[0].max_income,
            BracketCeiling::Bounded(dec!(22000))
        );
        assert_eq!(
            policy.federal_schedule(FilingStatus::Single).brackets()[0].max_income,
            BracketCeiling::Bounded(dec!(11000))
        );
    }

    #[test]
    fn county_table_keeps_source_order() {
        let policy = PolicyTables::default();
        let names: Vec<_> = policy.counties.rates().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names.len(), 15);
        assert_eq!(names[0], "Los Angeles");
        assert_eq!(names[14], "Solano");
    }

    #[test]
    fn san_mateo_has_multiplier_but_no_surtax_entry() {
        let policy = PolicyTables::default();

        assert!(policy.housing.multiplier("San Mateo").is_known());
        assert!(!policy.counties.tax_rate("San Mateo").is_known());
    }
}
