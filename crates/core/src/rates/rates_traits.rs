use crate::errors::Result;
use crate::rates::rates_model::{BankRate, FuelPrice, MetalRate, MetalRateItem};

/// Trait for rate data sources
pub trait RateRepositoryTrait: Send + Sync {
    fn load_fd_rates(&self) -> Result<Vec<BankRate>>;
    fn load_rd_rates(&self) -> Result<Vec<BankRate>>;
    fn load_fuel_prices(&self) -> Result<Vec<FuelPrice>>;
    fn load_metal_rates(&self) -> Result<Vec<MetalRate>>;
}

/// Trait for rate service operations
pub trait RateServiceTrait: Send + Sync {
    fn get_fd_rates(&self) -> Result<Vec<BankRate>>;
    fn get_rd_rates(&self) -> Result<Vec<BankRate>>;
    fn get_fuel_prices(&self) -> Result<Vec<FuelPrice>>;
    fn get_fuel_price(&self, city: &str) -> Result<FuelPrice>;
    fn get_metal_rates(&self) -> Result<Vec<MetalRateItem>>;
    fn get_metal_rate(&self, city: &str) -> Result<MetalRateItem>;
}
