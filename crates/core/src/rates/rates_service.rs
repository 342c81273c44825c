use std::sync::Arc;

use crate::errors::{Error, Result};

use super::rates_model::{BankRate, FuelPrice, MetalRateItem};
use super::rates_traits::{RateRepositoryTrait, RateServiceTrait};

pub struct RateService {
    repository: Arc<dyn RateRepositoryTrait>,
}

impl RateService {
    pub fn new(repository: Arc<dyn RateRepositoryTrait>) -> Self {
        RateService { repository }
    }

    fn sorted_by_general_rate(mut rates: Vec<BankRate>) -> Vec<BankRate> {
        rates.sort_by(|a, b| b.general_rate.cmp(&a.general_rate));
        rates
    }
}

fn same_city(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl RateServiceTrait for RateService {
    fn get_fd_rates(&self) -> Result<Vec<BankRate>> {
        Ok(Self::sorted_by_general_rate(self.repository.load_fd_rates()?))
    }

    fn get_rd_rates(&self) -> Result<Vec<BankRate>> {
        Ok(Self::sorted_by_general_rate(self.repository.load_rd_rates()?))
    }

    fn get_fuel_prices(&self) -> Result<Vec<FuelPrice>> {
        self.repository.load_fuel_prices()
    }

    fn get_fuel_price(&self, city: &str) -> Result<FuelPrice> {
        self.repository
            .load_fuel_prices()?
            .into_iter()
            .find(|price| same_city(&price.city, city))
            .ok_or_else(|| Error::NotFound(format!("Fuel price for city '{}'", city)))
    }

    fn get_metal_rates(&self) -> Result<Vec<MetalRateItem>> {
        Ok(self
            .repository
            .load_metal_rates()?
            .into_iter()
            .map(MetalRateItem::from)
            .collect())
    }

    fn get_metal_rate(&self, city: &str) -> Result<MetalRateItem> {
        self.repository
            .load_metal_rates()?
            .into_iter()
            .find(|rate| same_city(&rate.city, city))
            .map(MetalRateItem::from)
            .ok_or_else(|| Error::NotFound(format!("Metal rate for city '{}'", city)))
    }
}
