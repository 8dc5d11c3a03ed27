//! Calculation modules for the budget engine.
//!
//! Each module is a pure function of its inputs and the immutable
//! [`PolicyTables`](crate::PolicyTables); nothing here holds state between
//! calls.

pub mod brackets;
pub mod budget;
pub mod common;
pub mod housing;
pub mod income;
pub mod tax;

pub use budget::{Allocation, BudgetBreakdown, BudgetCategory, IncomeTier, allocate_budget};
pub use housing::{HousingRecommendation, IdealRange, recommend_housing};
pub use income::{IncomeConversion, PayCadence, WorkSchedule, convert_income};
pub use tax::{TaxCalculator, TaxResult};
