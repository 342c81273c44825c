use rust_decimal::prelude::*;

use crate::errors::Result;

use super::calculators_model::{EmiInput, EmiResult};
use super::calculators_validation::{
    overflow, require_positive, require_rate, require_tenure, to_money, MAX_MONTHS,
};

/// Equated monthly instalment: `P * i * (1 + i)^n / ((1 + i)^n - 1)`.
pub fn calculate_emi(input: &EmiInput) -> Result<EmiResult> {
    require_positive(input.principal, "principal")?;
    require_rate(input.annual_rate)?;
    require_tenure(input.months, "months", MAX_MONTHS)?;

    let months = Decimal::from(input.months);
    let monthly_rate = input.annual_rate / Decimal::from(1200);

    let emi = if monthly_rate.is_zero() {
        input.principal / months
    } else {
        let growth = (Decimal::ONE + monthly_rate)
            .checked_powu(u64::from(input.months))
            .ok_or_else(overflow)?;
        input
            .principal
            .checked_mul(monthly_rate)
            .and_then(|v| v.checked_mul(growth))
            .and_then(|v| v.checked_div(growth - Decimal::ONE))
            .ok_or_else(overflow)?
    };

    let total_payment = emi.checked_mul(months).ok_or_else(overflow)?;

    Ok(EmiResult {
        monthly_emi: to_money(emi),
        principal: to_money(input.principal),
        total_interest: to_money(total_payment - input.principal),
        total_payment: to_money(total_payment),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_home_loan_emi() {
        let result = calculate_emi(&EmiInput {
            principal: dec!(1000000),
            annual_rate: dec!(8.5),
            months: 240,
        })
        .unwrap();

        assert_eq!(result.monthly_emi, dec!(8678.23));
        assert_eq!(result.principal, dec!(1000000));
        assert_eq!(
            result.total_interest,
            result.total_payment - result.principal
        );
        assert!(result.total_payment > dec!(2082775));
        assert!(result.total_payment < dec!(2082777));
    }

    #[test]
    fn test_interest_free_emi() {
        let result = calculate_emi(&EmiInput {
            principal: dec!(120000),
            annual_rate: Decimal::ZERO,
            months: 12,
        })
        .unwrap();
        assert_eq!(result.monthly_emi, dec!(10000));
        assert_eq!(result.total_interest, Decimal::ZERO);
    }

    #[test]
    fn test_emi_rejects_rate_above_hundred() {
        assert!(calculate_emi(&EmiInput {
            principal: dec!(1000),
            annual_rate: dec!(101),
            months: 12,
        })
        .is_err());
    }
}
