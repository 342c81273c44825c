//! Calculator inputs and results.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// The calculators the site offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Sip,
    Lumpsum,
    Fd,
    Rd,
    Emi,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 5] = [
        CalculatorKind::Sip,
        CalculatorKind::Lumpsum,
        CalculatorKind::Fd,
        CalculatorKind::Rd,
        CalculatorKind::Emi,
    ];

    /// URL segment
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::Sip => "sip",
            CalculatorKind::Lumpsum => "lumpsum",
            CalculatorKind::Fd => "fd",
            CalculatorKind::Rd => "rd",
            CalculatorKind::Emi => "emi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalculatorKind::Sip => "SIP Calculator",
            CalculatorKind::Lumpsum => "Lumpsum Calculator",
            CalculatorKind::Fd => "FD Calculator",
            CalculatorKind::Rd => "RD Calculator",
            CalculatorKind::Emi => "EMI Calculator",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CalculatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown calculator '{}'",
                    s
                )))
            })
    }
}

/// Monthly SIP; `annual_rate` is the expected return in percent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SipInput {
    pub monthly_investment: Decimal,
    pub annual_rate: Decimal,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LumpsumInput {
    pub principal: Decimal,
    pub annual_rate: Decimal,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FdInput {
    pub principal: Decimal,
    pub annual_rate: Decimal,
    pub months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RdInput {
    pub monthly_deposit: Decimal,
    pub annual_rate: Decimal,
    pub months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmiInput {
    pub principal: Decimal,
    pub annual_rate: Decimal,
    pub months: u32,
}

/// Outcome of an investment or deposit calculator, rounded to paise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResult {
    pub invested_amount: Decimal,
    pub estimated_returns: Decimal,
    pub total_value: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmiResult {
    pub monthly_emi: Decimal,
    pub principal: Decimal,
    pub total_interest: Decimal,
    pub total_payment: Decimal,
}
