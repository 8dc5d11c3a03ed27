//! Personal budget engine for California residents.
//!
//! Turns a yearly salary into federal, state, county and payroll taxes,
//! then splits the monthly net income into spending categories and a
//! county-adjusted housing recommendation.

pub mod calculations;
pub mod engine;
pub mod error;
pub mod models;
pub mod policy;
pub mod tips;

pub use calculations::{
    BudgetBreakdown, HousingRecommendation, IdealRange, IncomeConversion, IncomeTier, PayCadence,
    TaxResult, WorkSchedule,
};
pub use engine::{BudgetEngine, BudgetReport, BudgetRequest, ConversionRequest};
pub use error::{EngineError, PolicyError};
pub use models::*;
pub use policy::PolicyTables;
pub use tips::TipsCatalog;
