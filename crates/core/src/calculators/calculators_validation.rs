use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

/// Longest accepted tenure in years
pub(crate) const MAX_YEARS: u32 = 50;

/// Longest accepted tenure in months
pub(crate) const MAX_MONTHS: u32 = MAX_YEARS * 12;

pub(crate) fn require_positive(value: Decimal, field: &str) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(invalid(format!("{} must be greater than zero", field)));
    }
    Ok(())
}

/// Rates are percentages in `0..=100`.
pub(crate) fn require_rate(rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
        return Err(invalid("annualRate must be between 0 and 100".to_string()));
    }
    Ok(())
}

pub(crate) fn require_tenure(value: u32, field: &str, max: u32) -> Result<()> {
    if value == 0 || value > max {
        return Err(invalid(format!("{} must be between 1 and {}", field, max)));
    }
    Ok(())
}

pub(crate) fn overflow() -> Error {
    Error::Calculation("Arithmetic overflow".to_string())
}

/// Rounds half away from zero to paise.
pub(crate) fn to_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

fn invalid(message: String) -> Error {
    Error::Validation(ValidationError::InvalidInput(message))
}
