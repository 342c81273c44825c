//! Display formatting for listing and rate values.

use chrono::NaiveDate;
use marketdesk_core::constants::{DATE_TO_BE_ANNOUNCED, MISSING_VALUE};
use marketdesk_core::utils::{format_inr, short_date_or};
use rust_decimal::prelude::*;

pub fn rupees(value: Decimal) -> String {
    value
        .to_f64()
        .map(format_inr)
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}

/// Day-over-day change with an explicit sign: "+0.06", "-0.12", "0.00".
pub fn change(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

pub fn short_date(date: Option<NaiveDate>) -> String {
    short_date_or(date, DATE_TO_BE_ANNOUNCED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rupees() {
        assert_eq!(rupees(dec!(148500)), "₹1,48,500");
        assert_eq!(rupees(dec!(94.77)), "₹94.77");
    }

    #[test]
    fn test_percent_and_change() {
        assert_eq!(percent(dec!(10)), "10.00%");
        assert_eq!(percent(dec!(-5.5)), "-5.50%");
        assert_eq!(change(dec!(0.06)), "+0.06");
        assert_eq!(change(dec!(-0.12)), "-0.12");
        assert_eq!(change(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(NaiveDate::from_ymd_opt(2026, 10, 5)), "5 Oct 2026");
        assert_eq!(short_date(None), "TBA");
    }
}
