use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use marketdesk_core::rates::{BankRate, FuelPrice, MetalRateItem};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Default, Deserialize)]
struct CityParams {
    city: Option<String>,
}

async fn get_fd_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<BankRate>>> {
    Ok(Json(state.rate_service.get_fd_rates()?))
}

async fn get_rd_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<BankRate>>> {
    Ok(Json(state.rate_service.get_rd_rates()?))
}

/// All cities, or a single city when `?city=` is given (404 if unknown).
async fn get_fuel_prices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CityParams>,
) -> ApiResult<Json<Vec<FuelPrice>>> {
    let prices = match params.city.as_deref() {
        Some(city) => vec![state.rate_service.get_fuel_price(city)?],
        None => state.rate_service.get_fuel_prices()?,
    };
    Ok(Json(prices))
}

async fn get_metal_rates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CityParams>,
) -> ApiResult<Json<Vec<MetalRateItem>>> {
    let rates = match params.city.as_deref() {
        Some(city) => vec![state.rate_service.get_metal_rate(city)?],
        None => state.rate_service.get_metal_rates()?,
    };
    Ok(Json(rates))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rates/fd", get(get_fd_rates))
        .route("/rates/rd", get(get_rd_rates))
        .route("/rates/fuel", get(get_fuel_prices))
        .route("/rates/metals", get(get_metal_rates))
}
