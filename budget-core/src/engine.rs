//! Entry points used by callers of the budget engine.
//!
//! [`BudgetEngine`] owns the policy tables and exposes the four public
//! operations: budget computation, income conversion, the county list and
//! the tips catalog. Inputs are validated here once; the calculation
//! modules assume valid input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{
    BudgetBreakdown, HousingRecommendation, IncomeConversion, IncomeTier, PayCadence,
    TaxCalculator, TaxResult, WorkSchedule, allocate_budget, convert_income, recommend_housing,
};
use crate::error::EngineError;
use crate::models::{CountyRate, DEFAULT_COUNTY, FilingStatus};
use crate::policy::PolicyTables;
use crate::tips::TipsCatalog;

/// Input to [`BudgetEngine::compute_budget`].
///
/// Missing filing status resolves to `single` and a missing county to
/// [`DEFAULT_COUNTY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub yearly_income: Decimal,
    #[serde(default)]
    pub filing_status: Option<FilingStatus>,
    #[serde(default)]
    pub county: Option<String>,
}

impl BudgetRequest {
    pub fn new(yearly_income: Decimal) -> Self {
        Self {
            yearly_income,
            filing_status: None,
            county: None,
        }
    }

    pub fn with_filing_status(
        mut self,
        filing_status: FilingStatus,
    ) -> Self {
        self.filing_status = Some(filing_status);
        self
    }

    pub fn with_county(
        mut self,
        county: impl Into<String>,
    ) -> Self {
        self.county = Some(county.into());
        self
    }
}

/// Flat result of a budget computation. Money fields are rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub yearly_income: Decimal,
    pub filing_status: FilingStatus,
    pub county: String,
    pub county_recognized: bool,
    #[serde(flatten)]
    pub taxes: TaxResult,
    pub income_level: IncomeTier,
    pub budget_breakdown: BudgetBreakdown,
    pub housing_recommendations: HousingRecommendation,
}

/// Input to [`BudgetEngine::convert_income`]; the cadence stays a string
/// until validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: Decimal,
    pub from: String,
    #[serde(default)]
    pub hours_per_week: Option<Decimal>,
    #[serde(default)]
    pub weeks_per_year: Option<Decimal>,
}

impl ConversionRequest {
    fn schedule(&self) -> WorkSchedule {
        let defaults = WorkSchedule::default();
        WorkSchedule {
            hours_per_week: self.hours_per_week.unwrap_or(defaults.hours_per_week),
            weeks_per_year: self.weeks_per_year.unwrap_or(defaults.weeks_per_year),
        }
    }
}

/// Stateless facade over a fixed set of policy tables.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::{BudgetEngine, BudgetRequest, FilingStatus, IncomeTier};
///
/// let engine = BudgetEngine::default();
/// let report = engine
///     .compute_budget(&BudgetRequest::new(dec!(50000)).with_filing_status(FilingStatus::Single))
///     .unwrap();
///
/// assert_eq!(report.county, "Los Angeles");
/// assert_eq!(report.taxes.monthly_net_income, dec!(3398.07));
/// assert_eq!(report.income_level, IncomeTier::Medium);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BudgetEngine {
    policy: PolicyTables,
}

impl BudgetEngine {
    pub fn new(policy: PolicyTables) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PolicyTables {
        &self.policy
    }

    /// Taxes, net income, income tier, spending breakdown and housing
    /// guidance for one yearly salary.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidIncome`] when the yearly income is not positive.
    pub fn compute_budget(
        &self,
        request: &BudgetRequest,
    ) -> Result<BudgetReport, EngineError> {
        let filing_status = request.filing_status.unwrap_or_default();
        let county = request.county.as_deref().unwrap_or(DEFAULT_COUNTY);

        let taxes = TaxCalculator::new(&self.policy).calculate(
            request.yearly_income,
            filing_status,
            county,
        )?;

        let monthly = taxes.monthly_net_income;
        let income_level = IncomeTier::from_monthly(monthly);
        let budget_breakdown = allocate_budget(monthly);
        let housing = recommend_housing(monthly, county, &self.policy.housing);
        let county_recognized = self.policy.counties.tax_rate(county).is_known();

        debug!(%monthly, %income_level, county_recognized, "computed budget");

        Ok(BudgetReport {
            yearly_income: request.yearly_income,
            filing_status,
            county: county.to_string(),
            county_recognized,
            taxes: taxes.rounded(),
            income_level,
            budget_breakdown: budget_breakdown.rounded(),
            housing_recommendations: housing.rounded(),
        })
    }

    /// Expresses an income at every pay cadence, rounded to cents.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownCadence`] is checked first, then
    /// [`EngineError::InvalidAmount`] and [`EngineError::InvalidWorkSchedule`].
    pub fn convert_income(
        &self,
        request: &ConversionRequest,
    ) -> Result<IncomeConversion, EngineError> {
        let from: PayCadence = request.from.parse()?;
        let converted = convert_income(request.amount, from, request.schedule())?;

        debug!(amount = %request.amount, %from, yearly = %converted.yearly, "converted income");
        Ok(converted.rounded())
    }

    /// County surtax table in source order.
    pub fn counties(&self) -> Vec<CountyRate> {
        self.policy.counties.rates().to_vec()
    }

    pub fn tips(&self) -> TipsCatalog {
        TipsCatalog::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::IdealRange;

    fn engine() -> BudgetEngine {
        BudgetEngine::default()
    }

    #[test]
    fn compute_budget_single_50000_los_angeles() {
        let report = engine()
            .compute_budget(
                &BudgetRequest::new(dec!(50000))
                    .with_filing_status(FilingStatus::Single)
                    .with_county("Los Angeles"),
            )
            .unwrap();

        assert_eq!(report.taxes.federal_tax, dec!(4028.00));
        assert_eq!(report.taxes.total_tax, dec!(9223.16));
        assert_eq!(report.taxes.effective_tax_rate_percent, dec!(18.45));
        assert_eq!(report.income_level, IncomeTier::Medium);
        assert_eq!(report.budget_breakdown.housing, dec!(1019.42));
        assert_eq!(report.housing_recommendations.recommended_max, dec!(1121.36));
        assert_eq!(
            report.housing_recommendations.ideal_range,
            IdealRange {
                min: dec!(815.54),
                max: dec!(1223.31),
            }
        );
        // LA is not high cost, but income is under 4000/month
        assert_eq!(report.housing_recommendations.tips.len(), 6);
        assert!(report.county_recognized);
    }

    #[test]
    fn missing_inputs_use_documented_defaults() {
        let report = engine()
            .compute_budget(&BudgetRequest::new(dec!(50000)))
            .unwrap();

        assert_eq!(report.filing_status, FilingStatus::Single);
        assert_eq!(report.county, "Los Angeles");
    }

    #[test]
    fn married_high_earner_in_san_francisco() {
        let report = engine()
            .compute_budget(
                &BudgetRequest::new(dec!(300000))
                    .with_filing_status(FilingStatus::Married)
                    .with_county("San Francisco"),
            )
            .unwrap();

        assert_eq!(report.taxes.state_tax, dec!(23411.92));
        assert_eq!(report.taxes.total_tax, dec!(91076.32));
        assert_eq!(report.taxes.monthly_net_income, dec!(17410.31));
        assert_eq!(report.income_level, IncomeTier::High);
        // 30% × 1.4 exceeds the 40% cap: 17410.3065 × 0.40
        assert_eq!(report.housing_recommendations.recommended_max, dec!(6964.12));
        assert_eq!(report.housing_recommendations.tips.len(), 6);
    }

    #[test]
    fn unknown_county_defaults_without_error() {
        let report = engine()
            .compute_budget(&BudgetRequest::new(dec!(100000)).with_county("Nowhereville"))
            .unwrap();

        assert!(!report.county_recognized);
        assert_eq!(report.county, "Nowhereville");
        assert_eq!(report.taxes.county_tax, dec!(150.00));
        assert_eq!(report.housing_recommendations.county_factor, dec!(1.0));
    }

    #[test]
    fn non_positive_income_is_invalid_input() {
        for income in [dec!(0), dec!(-1)] {
            let err = engine()
                .compute_budget(&BudgetRequest::new(income))
                .unwrap_err();

            assert_eq!(err, EngineError::InvalidIncome(income));
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn breakdown_sums_to_monthly_net_income() {
        for income in [dec!(20000), dec!(50000), dec!(150000), dec!(400000)] {
            let report = engine()
                .compute_budget(&BudgetRequest::new(income))
                .unwrap();
            let diff = report.budget_breakdown.total() - report.taxes.monthly_net_income;

            assert!(diff.abs() <= dec!(0.05), "income {income}: off by {diff}");
        }
    }

    #[test]
    fn report_serializes_flat() {
        let report = engine()
            .compute_budget(&BudgetRequest::new(dec!(50000)))
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["filing_status"], "single");
        assert_eq!(json["income_level"], "medium");
        assert_eq!(json["federal_tax"], "4028.00");
        assert!(json.get("taxes").is_none());
        assert_eq!(json["budget_breakdown"]["housing"], "1019.42");
    }

    #[test]
    fn convert_income_hourly_25() {
        let converted = engine()
            .convert_income(&ConversionRequest {
                amount: dec!(25),
                from: "hourly".to_string(),
                hours_per_week: Some(dec!(40)),
                weeks_per_year: Some(dec!(52)),
            })
            .unwrap();

        assert_eq!(converted.yearly, dec!(52000.00));
        assert_eq!(converted.monthly, dec!(4333.33));
        assert_eq!(converted.weekly, dec!(1000.00));
        assert_eq!(converted.biweekly, dec!(2000.00));
    }

    #[test]
    fn convert_income_defaults_schedule() {
        let converted = engine()
            .convert_income(&ConversionRequest {
                amount: dec!(52000),
                from: "yearly".to_string(),
                hours_per_week: None,
                weeks_per_year: None,
            })
            .unwrap();

        assert_eq!(converted.hourly, dec!(25.00));
    }

    #[test]
    fn convert_income_rejects_unknown_cadence() {
        let err = engine()
            .convert_income(&ConversionRequest {
                amount: dec!(100),
                from: "daily".to_string(),
                hours_per_week: None,
                weeks_per_year: None,
            })
            .unwrap_err();

        assert_eq!(err, EngineError::UnknownCadence("daily".to_string()));
    }

    #[test]
    fn convert_income_checks_cadence_before_amount() {
        let convert = |amount, from: &str| {
            engine()
                .convert_income(&ConversionRequest {
                    amount,
                    from: from.to_string(),
                    hours_per_week: None,
                    weeks_per_year: None,
                })
                .unwrap_err()
        };

        assert_eq!(
            convert(dec!(0), "daily"),
            EngineError::UnknownCadence("daily".to_string())
        );
        assert_eq!(convert(dec!(0), "hourly"), EngineError::InvalidAmount(dec!(0)));
    }

    #[test]
    fn convert_income_rejects_overflowing_amount() {
        let amount = Decimal::from_i128_with_scale(10i128.pow(26), 0);

        let err = engine()
            .convert_income(&ConversionRequest {
                amount,
                from: "hourly".to_string(),
                hours_per_week: None,
                weeks_per_year: None,
            })
            .unwrap_err();

        assert_eq!(err, EngineError::InvalidAmount(amount));
    }

    #[test]
    fn compute_budget_near_decimal_limit() {
        let income = Decimal::MAX / dec!(2);

        let report = engine().compute_budget(&BudgetRequest::new(income)).unwrap();

        assert_eq!(report.income_level, IncomeTier::High);
        assert!(report.taxes.total_tax < report.yearly_income);
        assert!(report.housing_recommendations.recommended_max > Decimal::ZERO);
    }

    #[test]
    fn counties_are_ordered_name_rate_pairs() {
        let counties = engine().counties();

        assert_eq!(counties.len(), 15);
        assert_eq!(
            counties[1],
            CountyRate {
                name: "San Francisco".to_string(),
                tax_rate: dec!(0.0038),
            }
        );
    }

    #[test]
    fn tips_include_housing_baseline() {
        assert_eq!(engine().tips().housing_baseline.len(), 3);
    }
}
