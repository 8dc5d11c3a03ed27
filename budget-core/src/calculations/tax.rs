//! Multi-authority tax aggregation.
//!
//! Combines the five tax components levied on a yearly salary:
//!
//! | Component        | Base                                   | Rule                                  |
//! |------------------|----------------------------------------|---------------------------------------|
//! | Federal          | income − federal standard deduction    | federal schedule for the filing status |
//! | State            | income − state standard deduction      | state schedule                        |
//! | County           | gross income                           | flat county surtax                    |
//! | Social Security  | gross income up to the wage base       | flat rate                             |
//! | Medicare         | gross income                           | flat rate plus surtax over threshold  |
//!
//! The county surtax is levied on gross income, before any deduction.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::{FilingStatus, PolicyTables};
//! use budget_core::calculations::TaxCalculator;
//!
//! let policy = PolicyTables::default();
//! let result = TaxCalculator::new(&policy)
//!     .calculate(dec!(50000), FilingStatus::Single, "Los Angeles")
//!     .unwrap();
//!
//! assert_eq!(result.federal_tax, dec!(4028));
//! assert_eq!(result.rounded().total_tax, dec!(9223.16));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, round_half_up, taxable_income};
use crate::error::EngineError;
use crate::models::{FilingStatus, Lookup, TaxAuthority};
use crate::policy::PolicyTables;

/// Tax components and the resulting net income for one yearly salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub county_tax: Decimal,
    pub social_security_tax: Decimal,
    pub medicare_tax: Decimal,
    pub total_tax: Decimal,
    pub net_yearly_income: Decimal,
    pub monthly_net_income: Decimal,
    pub effective_tax_rate_percent: Decimal,
}

impl TaxResult {
    /// Copy with every field rounded to cents.
    pub fn rounded(&self) -> Self {
        Self {
            federal_tax: round_half_up(self.federal_tax),
            state_tax: round_half_up(self.state_tax),
            county_tax: round_half_up(self.county_tax),
            social_security_tax: round_half_up(self.social_security_tax),
            medicare_tax: round_half_up(self.medicare_tax),
            total_tax: round_half_up(self.total_tax),
            net_yearly_income: round_half_up(self.net_yearly_income),
            monthly_net_income: round_half_up(self.monthly_net_income),
            effective_tax_rate_percent: round_half_up(self.effective_tax_rate_percent),
        }
    }
}

/// Calculator over a fixed set of policy tables.
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator<'a> {
    policy: &'a PolicyTables,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(policy: &'a PolicyTables) -> Self {
        Self { policy }
    }

    /// Computes every tax component at full precision.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIncome`] when `yearly_income` is zero
    /// or negative, or so large that the summed taxes overflow a `Decimal`.
    pub fn calculate(
        &self,
        yearly_income: Decimal,
        filing_status: FilingStatus,
        county: &str,
    ) -> Result<TaxResult, EngineError> {
        if yearly_income <= Decimal::ZERO {
            return Err(EngineError::InvalidIncome(yearly_income));
        }

        let federal_tax = self.federal_tax(yearly_income, filing_status);
        let state_tax = self.state_tax(yearly_income, filing_status);
        let county_tax = self.county_tax(yearly_income, county);
        let social_security_tax = self.social_security_tax(yearly_income);
        let medicare_tax = self.medicare_tax(yearly_income, filing_status);

        let total_tax = [state_tax, county_tax, social_security_tax, medicare_tax]
            .into_iter()
            .try_fold(federal_tax, Decimal::checked_add)
            .ok_or(EngineError::InvalidIncome(yearly_income))?;
        let net_yearly_income = yearly_income - total_tax;
        let monthly_net_income = net_yearly_income / Decimal::from(12);
        // Divide first: the ratio is small, `total_tax * 100` may not be.
        let effective_tax_rate_percent = total_tax / yearly_income * Decimal::ONE_HUNDRED;

        debug!(
            %yearly_income,
            %filing_status,
            county,
            %federal_tax,
            %state_tax,
            %county_tax,
            %social_security_tax,
            %medicare_tax,
            %total_tax,
            "computed taxes"
        );

        Ok(TaxResult {
            federal_tax,
            state_tax,
            county_tax,
            social_security_tax,
            medicare_tax,
            total_tax,
            net_yearly_income,
            monthly_net_income,
            effective_tax_rate_percent,
        })
    }

    /// Federal bracket tax after the federal standard deduction.
    pub fn federal_tax(
        &self,
        yearly_income: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let deduction = self
            .policy
            .deductions
            .resolve(TaxAuthority::Federal, filing_status);
        self.policy
            .federal_schedule(filing_status)
            .tax_on(taxable_income(yearly_income, deduction))
    }

    /// State bracket tax after the state standard deduction.
    pub fn state_tax(
        &self,
        yearly_income: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let deduction = self
            .policy
            .deductions
            .resolve(TaxAuthority::State, filing_status);
        self.policy
            .state
            .tax_on(taxable_income(yearly_income, deduction))
    }

    /// Flat surtax on gross income. Saturates at `Decimal::MAX`.
    pub fn county_tax(
        &self,
        yearly_income: Decimal,
        county: &str,
    ) -> Decimal {
        let rate = self.policy.counties.tax_rate(county);
        if let Lookup::Defaulted(rate) = rate {
            debug!(county, %rate, "county not in surtax table; using default rate");
        }
        yearly_income.saturating_mul(rate.value())
    }

    pub fn social_security_tax(
        &self,
        yearly_income: Decimal,
    ) -> Decimal {
        let payroll = &self.policy.payroll;
        yearly_income.min(payroll.ss_wage_base) * payroll.ss_tax_rate
    }

    /// Base Medicare plus the additional surtax above the filing-status
    /// threshold.
    pub fn medicare_tax(
        &self,
        yearly_income: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let payroll = &self.policy.payroll;
        let threshold = payroll.additional_medicare_threshold(filing_status);
        let base = yearly_income * payroll.medicare_tax_rate;
        let additional = max(yearly_income - threshold, Decimal::ZERO)
            * payroll.additional_medicare_rate;
        base + additional
    }
}
