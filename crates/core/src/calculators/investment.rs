//! SIP and lumpsum growth.

use rust_decimal::prelude::*;

use crate::errors::Result;

use super::calculators_model::{CalculatorResult, LumpsumInput, SipInput};
use super::calculators_validation::{
    overflow, require_positive, require_rate, require_tenure, to_money, MAX_YEARS,
};

const MONTHS_PER_YEAR: u32 = 12;

/// Future value of a monthly SIP paid at the start of each month:
/// `P * ((1 + i)^n - 1) / i * (1 + i)` with `i` the monthly rate.
pub fn calculate_sip(input: &SipInput) -> Result<CalculatorResult> {
    require_positive(input.monthly_investment, "monthlyInvestment")?;
    require_rate(input.annual_rate)?;
    require_tenure(input.years, "years", MAX_YEARS)?;

    let months = input.years * MONTHS_PER_YEAR;
    let invested = input
        .monthly_investment
        .checked_mul(Decimal::from(months))
        .ok_or_else(overflow)?;

    let monthly_rate = input.annual_rate / Decimal::from(MONTHS_PER_YEAR * 100);
    let total_value = if monthly_rate.is_zero() {
        invested
    } else {
        let step = Decimal::ONE + monthly_rate;
        let growth = step.checked_powu(u64::from(months)).ok_or_else(overflow)?;
        ((growth - Decimal::ONE) / monthly_rate)
            .checked_mul(step)
            .and_then(|factor| factor.checked_mul(input.monthly_investment))
            .ok_or_else(overflow)?
    };

    Ok(CalculatorResult {
        invested_amount: to_money(invested),
        estimated_returns: to_money(total_value - invested),
        total_value: to_money(total_value),
    })
}

/// One-time investment compounded yearly: `P * (1 + r)^years`.
pub fn calculate_lumpsum(input: &LumpsumInput) -> Result<CalculatorResult> {
    require_positive(input.principal, "principal")?;
    require_rate(input.annual_rate)?;
    require_tenure(input.years, "years", MAX_YEARS)?;

    let step = Decimal::ONE + input.annual_rate / Decimal::ONE_HUNDRED;
    let total_value = step
        .checked_powu(u64::from(input.years))
        .and_then(|growth| growth.checked_mul(input.principal))
        .ok_or_else(overflow)?;

    Ok(CalculatorResult {
        invested_amount: to_money(input.principal),
        estimated_returns: to_money(total_value - input.principal),
        total_value: to_money(total_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sip_growth() {
        let result = calculate_sip(&SipInput {
            monthly_investment: dec!(5000),
            annual_rate: dec!(12),
            years: 10,
        })
        .unwrap();

        assert_eq!(result.invested_amount, dec!(600000));
        assert_eq!(result.total_value, dec!(1161695.38));
        assert_eq!(result.estimated_returns, dec!(561695.38));
    }

    #[test]
    fn test_sip_zero_rate() {
        let result = calculate_sip(&SipInput {
            monthly_investment: dec!(1000),
            annual_rate: Decimal::ZERO,
            years: 2,
        })
        .unwrap();
        assert_eq!(result.total_value, dec!(24000));
        assert_eq!(result.estimated_returns, Decimal::ZERO);
    }

    #[test]
    fn test_sip_rejects_bad_input() {
        let base = SipInput {
            monthly_investment: dec!(1000),
            annual_rate: dec!(12),
            years: 5,
        };
        assert!(calculate_sip(&SipInput {
            monthly_investment: Decimal::ZERO,
            ..base.clone()
        })
        .is_err());
        assert!(calculate_sip(&SipInput {
            annual_rate: dec!(-1),
            ..base.clone()
        })
        .is_err());
        assert!(calculate_sip(&SipInput { years: 0, ..base }).is_err());
    }

    #[test]
    fn test_lumpsum_growth() {
        let result = calculate_lumpsum(&LumpsumInput {
            principal: dec!(100000),
            annual_rate: dec!(12),
            years: 10,
        })
        .unwrap();

        assert_eq!(result.invested_amount, dec!(100000));
        assert_eq!(result.total_value, dec!(310584.82));
        assert_eq!(result.estimated_returns, dec!(210584.82));
    }

    #[test]
    fn test_lumpsum_rejects_long_tenure() {
        let err = calculate_lumpsum(&LumpsumInput {
            principal: dec!(100000),
            annual_rate: dec!(12),
            years: 51,
        })
        .unwrap_err();
        assert!(err.to_string().contains("years"));
    }
}
