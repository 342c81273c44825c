//! Rates module - bank deposit, fuel and precious metal rates.

mod rates_model;
mod rates_repository;
mod rates_service;
mod rates_traits;

pub use rates_model::{BankRate, FuelPrice, MetalRate, MetalRateItem};
pub use rates_repository::StaticRateRepository;
pub use rates_service::RateService;
pub use rates_traits::{RateRepositoryTrait, RateServiceTrait};
