use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Tax authority that grants a standard deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxAuthority {
    Federal,
    State,
}

impl TaxAuthority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::State => "state",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "federal" => Some(Self::Federal),
            "state" => Some(Self::State),
            _ => None,
        }
    }
}

impl fmt::Display for TaxAuthority {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard deduction per filing status for one authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDeduction {
    pub single: Decimal,
    pub married: Decimal,
}

impl StandardDeduction {
    pub fn amount(
        &self,
        filing_status: FilingStatus,
    ) -> Decimal {
        match filing_status {
            FilingStatus::Single => self.single,
            FilingStatus::Married => self.married,
        }
    }
}

/// The 2×2 authority/filing-status deduction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTable {
    pub federal: StandardDeduction,
    pub state: StandardDeduction,
}

impl DeductionTable {
    pub fn resolve(
        &self,
        authority: TaxAuthority,
        filing_status: FilingStatus,
    ) -> Decimal {
        match authority {
            TaxAuthority::Federal => self.federal.amount(filing_status),
            TaxAuthority::State => self.state.amount(filing_status),
        }
    }
}
