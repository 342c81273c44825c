//! Fixed and recurring deposits, compounded quarterly.

use rust_decimal::prelude::*;

use crate::errors::Result;

use super::calculators_model::{CalculatorResult, FdInput, RdInput};
use super::calculators_validation::{
    overflow, require_positive, require_rate, require_tenure, to_money, MAX_MONTHS,
};

/// Maturity of `principal` held for `months`.
///
/// Whole quarters compound at `rate / 4`; leftover months earn simple interest on
/// the compounded amount.
fn maturity(principal: Decimal, annual_rate: Decimal, months: u32) -> Option<Decimal> {
    let rate = annual_rate / Decimal::ONE_HUNDRED;
    let quarterly = Decimal::ONE + rate / Decimal::from(4);
    let compounded = quarterly
        .checked_powu(u64::from(months / 3))?
        .checked_mul(principal)?;

    let leftover = Decimal::from(months % 3) / Decimal::from(12);
    let simple = compounded.checked_mul(rate)?.checked_mul(leftover)?;
    compounded.checked_add(simple)
}

pub fn calculate_fd(input: &FdInput) -> Result<CalculatorResult> {
    require_positive(input.principal, "principal")?;
    require_rate(input.annual_rate)?;
    require_tenure(input.months, "months", MAX_MONTHS)?;

    let total_value =
        maturity(input.principal, input.annual_rate, input.months).ok_or_else(overflow)?;

    Ok(CalculatorResult {
        invested_amount: to_money(input.principal),
        estimated_returns: to_money(total_value - input.principal),
        total_value: to_money(total_value),
    })
}

/// Each monthly instalment matures like an FD over the months left in the tenure.
pub fn calculate_rd(input: &RdInput) -> Result<CalculatorResult> {
    require_positive(input.monthly_deposit, "monthlyDeposit")?;
    require_rate(input.annual_rate)?;
    require_tenure(input.months, "months", MAX_MONTHS)?;

    let invested = input
        .monthly_deposit
        .checked_mul(Decimal::from(input.months))
        .ok_or_else(overflow)?;

    let mut total_value = Decimal::ZERO;
    for remaining in 1..=input.months {
        let instalment =
            maturity(input.monthly_deposit, input.annual_rate, remaining).ok_or_else(overflow)?;
        total_value = total_value.checked_add(instalment).ok_or_else(overflow)?;
    }

    Ok(CalculatorResult {
        invested_amount: to_money(invested),
        estimated_returns: to_money(total_value - invested),
        total_value: to_money(total_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fd_one_year() {
        let result = calculate_fd(&FdInput {
            principal: dec!(100000),
            annual_rate: dec!(7),
            months: 12,
        })
        .unwrap();
        assert_eq!(result.total_value, dec!(107185.90));
        assert_eq!(result.estimated_returns, dec!(7185.90));
    }

    #[test]
    fn test_fd_leftover_months_earn_simple_interest() {
        let result = calculate_fd(&FdInput {
            principal: dec!(100000),
            annual_rate: dec!(12),
            months: 2,
        })
        .unwrap();
        assert_eq!(result.total_value, dec!(102000));
    }

    #[test]
    fn test_fd_zero_rate_returns_principal() {
        let result = calculate_fd(&FdInput {
            principal: dec!(50000),
            annual_rate: Decimal::ZERO,
            months: 36,
        })
        .unwrap();
        assert_eq!(result.total_value, dec!(50000));
    }

    #[test]
    fn test_rd_bounds() {
        let result = calculate_rd(&RdInput {
            monthly_deposit: dec!(1000),
            annual_rate: dec!(7),
            months: 12,
        })
        .unwrap();

        assert_eq!(result.invested_amount, dec!(12000));
        assert!(result.total_value > dec!(12000));
        assert!(result.total_value < dec!(12840));
        assert_eq!(
            result.estimated_returns,
            result.total_value - result.invested_amount
        );
    }

    #[test]
    fn test_rd_zero_rate() {
        let result = calculate_rd(&RdInput {
            monthly_deposit: dec!(2500),
            annual_rate: Decimal::ZERO,
            months: 24,
        })
        .unwrap();
        assert_eq!(result.total_value, dec!(60000));
    }

    #[test]
    fn test_deposits_reject_zero_months() {
        assert!(calculate_fd(&FdInput {
            principal: dec!(1000),
            annual_rate: dec!(7),
            months: 0,
        })
        .is_err());
        assert!(calculate_rd(&RdInput {
            monthly_deposit: dec!(1000),
            annual_rate: dec!(7),
            months: 601,
        })
        .is_err());
    }
}
