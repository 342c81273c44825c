//! Bank deposit, fuel and precious metal rate models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deposit rate offered by a bank, percent per annum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankRate {
    pub bank: String,
    pub general_rate: Decimal,
    pub senior_citizen_rate: Decimal,
    /// Tenure bucket the rate applies to, e.g. "1 year to 2 years"
    pub tenure: String,
}

/// Retail fuel price per litre. Changes are day-over-day and may be negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuelPrice {
    pub city: String,
    pub state: String,
    pub petrol: Decimal,
    pub diesel: Decimal,
    pub petrol_change: Decimal,
    pub diesel_change: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetalRate {
    pub city: String,
    #[serde(rename = "gold22kPerGram")]
    pub gold_22k_per_gram: Decimal,
    #[serde(rename = "gold24kPerGram")]
    pub gold_24k_per_gram: Decimal,
    pub silver_per_kg: Decimal,
    /// Day-over-day change of the 24K gram price
    pub change: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetalRateItem {
    #[serde(flatten)]
    pub rate: MetalRate,
    #[serde(rename = "gold22kPer10g")]
    pub gold_22k_per_10g: Decimal,
    #[serde(rename = "gold24kPer10g")]
    pub gold_24k_per_10g: Decimal,
}

impl From<MetalRate> for MetalRateItem {
    fn from(rate: MetalRate) -> Self {
        let ten = Decimal::TEN;
        MetalRateItem {
            gold_22k_per_10g: rate.gold_22k_per_gram * ten,
            gold_24k_per_10g: rate.gold_24k_per_gram * ten,
            rate,
        }
    }
}
