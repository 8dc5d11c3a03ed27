mod county;
mod filing_status;
mod payroll_config;
mod standard_deduction;
mod tax_bracket;

pub use county::{CountyRate, CountyTaxTable, DEFAULT_COUNTY, HousingCostTable, Lookup};
pub use filing_status::FilingStatus;
pub use payroll_config::PayrollConfig;
pub use standard_deduction::{DeductionTable, StandardDeduction, TaxAuthority};
pub use tax_bracket::{BracketCeiling, TaxBracket, TaxSchedule};
