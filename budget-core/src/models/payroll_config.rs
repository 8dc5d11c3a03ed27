use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Employee-side Social Security and Medicare parameters for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Wages above this cap are not subject to Social Security tax.
    pub ss_wage_base: Decimal,
    pub ss_tax_rate: Decimal,
    pub medicare_tax_rate: Decimal,
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_threshold_single: Decimal,
    pub additional_medicare_threshold_married: Decimal,
}

impl PayrollConfig {
    pub fn additional_medicare_threshold(
        &self,
        filing_status: FilingStatus,
    ) -> Decimal {
        match filing_status {
            FilingStatus::Single => self.additional_medicare_threshold_single,
            FilingStatus::Married => self.additional_medicare_threshold_married,
        }
    }
}
