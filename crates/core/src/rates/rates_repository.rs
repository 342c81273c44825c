use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;

use super::rates_model::{BankRate, FuelPrice, MetalRate};
use super::rates_traits::RateRepositoryTrait;

/// Rates bundled with the binary until live feeds are wired in.
#[derive(Debug, Default, Clone)]
pub struct StaticRateRepository;

impl StaticRateRepository {
    pub fn new() -> Self {
        StaticRateRepository
    }
}

fn bank_rate(
    bank: &str,
    general_rate: Decimal,
    senior_citizen_rate: Decimal,
    tenure: &str,
) -> BankRate {
    BankRate {
        bank: bank.to_string(),
        general_rate,
        senior_citizen_rate,
        tenure: tenure.to_string(),
    }
}

fn fuel(
    city: &str,
    state: &str,
    petrol: Decimal,
    diesel: Decimal,
    changes: (Decimal, Decimal),
) -> FuelPrice {
    FuelPrice {
        city: city.to_string(),
        state: state.to_string(),
        petrol,
        diesel,
        petrol_change: changes.0,
        diesel_change: changes.1,
    }
}

fn metal(
    city: &str,
    gold_22k: Decimal,
    gold_24k: Decimal,
    silver_kg: Decimal,
    change: Decimal,
) -> MetalRate {
    MetalRate {
        city: city.to_string(),
        gold_22k_per_gram: gold_22k,
        gold_24k_per_gram: gold_24k,
        silver_per_kg: silver_kg,
        change,
    }
}

impl RateRepositoryTrait for StaticRateRepository {
    fn load_fd_rates(&self) -> Result<Vec<BankRate>> {
        Ok(vec![
            bank_rate("State Bank of India", dec!(6.45), dec!(6.95), "2 years to 3 years"),
            bank_rate("HDFC Bank", dec!(6.60), dec!(7.10), "18 months to 21 months"),
            bank_rate("ICICI Bank", dec!(6.60), dec!(7.10), "2 years 1 day to 3 years"),
            bank_rate("Axis Bank", dec!(6.45), dec!(6.95), "2 years to 30 months"),
            bank_rate("Kotak Mahindra Bank", dec!(6.70), dec!(7.20), "391 days to 23 months"),
            bank_rate("Punjab National Bank", dec!(6.40), dec!(6.90), "390 days"),
            bank_rate("Bank of Baroda", dec!(6.50), dec!(7.00), "444 days"),
            bank_rate("Unity Small Finance Bank", dec!(8.15), dec!(8.65), "1001 days"),
            bank_rate(
                "Suryoday Small Finance Bank",
                dec!(7.90),
                dec!(8.40),
                "2 years 2 days to 3 years",
            ),
        ])
    }

    fn load_rd_rates(&self) -> Result<Vec<BankRate>> {
        Ok(vec![
            bank_rate("State Bank of India", dec!(6.45), dec!(6.95), "2 years to 3 years"),
            bank_rate("HDFC Bank", dec!(6.45), dec!(6.95), "27 months to 36 months"),
            bank_rate("ICICI Bank", dec!(6.50), dec!(7.00), "2 years to 3 years"),
            bank_rate("Axis Bank", dec!(6.45), dec!(6.95), "2 years to 3 years"),
            bank_rate("Post Office", dec!(6.70), dec!(6.70), "5 years"),
            bank_rate("AU Small Finance Bank", dec!(7.10), dec!(7.60), "2 years to 3 years"),
        ])
    }

    fn load_fuel_prices(&self) -> Result<Vec<FuelPrice>> {
        Ok(vec![
            fuel("New Delhi", "Delhi", dec!(94.77), dec!(87.67), (dec!(0.00), dec!(0.00))),
            fuel("Mumbai", "Maharashtra", dec!(103.50), dec!(90.03), (dec!(0.06), dec!(0.05))),
            fuel("Kolkata", "West Bengal", dec!(105.41), dec!(92.02), (dec!(-0.04), dec!(-0.03))),
            fuel("Chennai", "Tamil Nadu", dec!(100.90), dec!(92.49), (dec!(0.10), dec!(0.09))),
            fuel("Bengaluru", "Karnataka", dec!(102.92), dec!(90.99), (dec!(0.00), dec!(0.00))),
            fuel("Hyderabad", "Telangana", dec!(107.46), dec!(95.70), (dec!(-0.12), dec!(-0.11))),
            fuel("Pune", "Maharashtra", dec!(104.02), dec!(90.56), (dec!(0.21), dec!(0.20))),
            fuel("Ahmedabad", "Gujarat", dec!(94.49), dec!(90.17), (dec!(0.00), dec!(0.00))),
        ])
    }

    fn load_metal_rates(&self) -> Result<Vec<MetalRate>> {
        Ok(vec![
            metal("Delhi", dec!(11640), dec!(12698), dec!(168000), dec!(-43)),
            metal("Mumbai", dec!(11625), dec!(12682), dec!(168000), dec!(-43)),
            metal("Kolkata", dec!(11625), dec!(12682), dec!(168000), dec!(-43)),
            metal("Chennai", dec!(11680), dec!(12742), dec!(181000), dec!(-38)),
            metal("Bengaluru", dec!(11625), dec!(12682), dec!(168000), dec!(-43)),
            metal("Hyderabad", dec!(11625), dec!(12682), dec!(181000), dec!(-43)),
        ])
    }
}
