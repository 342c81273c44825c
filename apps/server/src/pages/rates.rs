use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
};
use marketdesk_core::{
    rates::{BankRate, FuelPrice, MetalRateItem},
    utils::{format_long_date, today_in_display_tz},
};
use serde::Deserialize;

use super::{
    faq,
    format::{change, percent, rupees},
    html::{empty_state, escape, key_values, page, table, Breadcrumb, PageMeta},
    render_or_error,
};
use crate::main_lib::AppState;

/// `?city=` on the fuel and gold pages
#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    city: Option<String>,
}

impl CityQuery {
    fn city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

fn city_path(base: &str, city: &str) -> String {
    format!("{}?city={}", base, urlencoding::encode(city))
}

fn bank_rate_table(rates: &[BankRate]) -> String {
    if rates.is_empty() {
        return empty_state("Rates are not available right now.");
    }
    let rows: Vec<Vec<String>> = rates
        .iter()
        .map(|rate| {
            vec![
                escape(&rate.bank),
                escape(&percent(rate.general_rate)),
                escape(&percent(rate.senior_citizen_rate)),
                escape(&rate.tenure),
            ]
        })
        .collect();
    table(&["Bank", "General", "Senior Citizen", "Tenure"], &rows)
}

pub async fn fd_rates(State(state): State<Arc<AppState>>) -> Response {
    let site = &state.site;

    render_or_error(site, "/fd-rates", || {
        let rates = state.rate_service.get_fd_rates()?;
        let content = format!(
            "<h1>FD Interest Rates</h1><p class=\"lead\">Fixed deposit rates of leading banks for \
general and senior citizen depositors, highest first.</p>{}\
<p><a href=\"/calculators/fd\">Calculate your FD maturity</a></p>",
            bank_rate_table(&rates)
        );
        let meta = PageMeta::new(
            "FD Interest Rates",
            "Compare the latest fixed deposit interest rates of SBI, HDFC Bank, ICICI Bank and other banks for general and senior citizens.",
            "/fd-rates",
        )
        .with_faqs(faq::items(faq::FD));
        Ok(page(site, &meta, &content))
    })
}

pub async fn rd_rates(State(state): State<Arc<AppState>>) -> Response {
    let site = &state.site;

    render_or_error(site, "/rd-rates", || {
        let rates = state.rate_service.get_rd_rates()?;
        let content = format!(
            "<h1>RD Interest Rates</h1><p class=\"lead\">Recurring deposit rates of leading banks, \
highest first.</p>{}<p><a href=\"/calculators/rd\">Calculate your RD maturity</a></p>",
            bank_rate_table(&rates)
        );
        let meta = PageMeta::new(
            "RD Interest Rates",
            "Compare the latest recurring deposit interest rates offered by banks for general and senior citizens.",
            "/rd-rates",
        )
        .with_faqs(faq::items(faq::RD));
        Ok(page(site, &meta, &content))
    })
}

fn fuel_table(prices: &[FuelPrice]) -> String {
    let rows: Vec<Vec<String>> = prices
        .iter()
        .map(|price| {
            vec![
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape(&city_path("/fuel-price", &price.city)),
                    escape(&price.city)
                ),
                escape(&price.state),
                escape(&rupees(price.petrol)),
                escape(&change(price.petrol_change)),
                escape(&rupees(price.diesel)),
                escape(&change(price.diesel_change)),
            ]
        })
        .collect();
    table(
        &["City", "State", "Petrol", "Change", "Diesel", "Change"],
        &rows,
    )
}

pub async fn fuel_prices(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CityQuery>, QueryRejection>,
) -> Response {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let site = &state.site;
    let today = format_long_date(today_in_display_tz());

    match query.city() {
        Some(city) => {
            let path = city_path("/fuel-price", city);
            render_or_error(site, &path, || {
                let price = state.rate_service.get_fuel_price(city)?;
                let title = format!("Petrol and Diesel Price in {}", price.city);
                let content = format!(
                    "<h1>{}</h1><p class=\"lead\">Prices per litre as of {}.</p>{}\
<p><a href=\"/fuel-price\">Fuel prices in other cities</a></p>",
                    escape(&title),
                    escape(&today),
                    key_values(&[
                        ("Petrol", rupees(price.petrol)),
                        ("Petrol change", change(price.petrol_change)),
                        ("Diesel", rupees(price.diesel)),
                        ("Diesel change", change(price.diesel_change)),
                        ("State", price.state.clone()),
                    ])
                );
                let meta = PageMeta::new(
                    &title,
                    &format!(
                        "Today's petrol price in {} is {} per litre and diesel is {} per litre.",
                        price.city,
                        rupees(price.petrol),
                        rupees(price.diesel)
                    ),
                    &path,
                )
                .with_breadcrumbs(vec![
                    Breadcrumb::new("Home", "/"),
                    Breadcrumb::new("Fuel Price", "/fuel-price"),
                    Breadcrumb::new(price.city.clone(), path.clone()),
                ])
                .with_faqs(faq::items(faq::FUEL));
                Ok(page(site, &meta, &content))
            })
        }
        None => render_or_error(site, "/fuel-price", || {
            let prices = state.rate_service.get_fuel_prices()?;
            let content = format!(
                "<h1>Petrol and Diesel Price Today</h1><p class=\"lead\">Retail fuel prices per litre \
in major cities as of {}.</p>{}",
                escape(&today),
                fuel_table(&prices)
            );
            let meta = PageMeta::new(
                "Petrol and Diesel Price Today",
                "Today's petrol and diesel prices per litre in Delhi, Mumbai, Chennai, Kolkata, Bengaluru and other cities.",
                "/fuel-price",
            )
            .with_faqs(faq::items(faq::FUEL));
            Ok(page(site, &meta, &content))
        }),
    }
}

fn metal_table(rates: &[MetalRateItem]) -> String {
    let rows: Vec<Vec<String>> = rates
        .iter()
        .map(|item| {
            vec![
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape(&city_path("/gold-rate", &item.rate.city)),
                    escape(&item.rate.city)
                ),
                escape(&rupees(item.gold_22k_per_10g)),
                escape(&rupees(item.gold_24k_per_10g)),
                escape(&rupees(item.rate.silver_per_kg)),
                escape(&change(item.rate.change)),
            ]
        })
        .collect();
    table(
        &["City", "22K (10g)", "24K (10g)", "Silver (1kg)", "Change (24K/g)"],
        &rows,
    )
}

pub async fn gold_rates(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CityQuery>, QueryRejection>,
) -> Response {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let site = &state.site;
    let today = format_long_date(today_in_display_tz());

    match query.city() {
        Some(city) => {
            let path = city_path("/gold-rate", city);
            render_or_error(site, &path, || {
                let item = state.rate_service.get_metal_rate(city)?;
                let title = format!("Gold Rate in {} Today", item.rate.city);
                let content = format!(
                    "<h1>{}</h1><p class=\"lead\">Gold and silver rates as of {}.</p>{}\
<p><a href=\"/gold-rate\">Gold rates in other cities</a></p>",
                    escape(&title),
                    escape(&today),
                    key_values(&[
                        ("22K gold (1g)", rupees(item.rate.gold_22k_per_gram)),
                        ("22K gold (10g)", rupees(item.gold_22k_per_10g)),
                        ("24K gold (1g)", rupees(item.rate.gold_24k_per_gram)),
                        ("24K gold (10g)", rupees(item.gold_24k_per_10g)),
                        ("Silver (1kg)", rupees(item.rate.silver_per_kg)),
                        ("Change (24K/g)", change(item.rate.change)),
                    ])
                );
                let meta = PageMeta::new(
                    &title,
                    &format!(
                        "Today's gold rate in {}: 22K at {} and 24K at {} per 10 grams.",
                        item.rate.city,
                        rupees(item.gold_22k_per_10g),
                        rupees(item.gold_24k_per_10g)
                    ),
                    &path,
                )
                .with_breadcrumbs(vec![
                    Breadcrumb::new("Home", "/"),
                    Breadcrumb::new("Gold Rate", "/gold-rate"),
                    Breadcrumb::new(item.rate.city.clone(), path.clone()),
                ])
                .with_faqs(faq::items(faq::GOLD));
                Ok(page(site, &meta, &content))
            })
        }
        None => render_or_error(site, "/gold-rate", || {
            let rates = state.rate_service.get_metal_rates()?;
            let content = format!(
                "<h1>Gold and Silver Rate Today</h1><p class=\"lead\">22K and 24K gold and silver rates \
in major cities as of {}.</p>{}",
                escape(&today),
                metal_table(&rates)
            );
            let meta = PageMeta::new(
                "Gold Rate Today",
                "Today's 22 carat and 24 carat gold rate and silver rate in Delhi, Mumbai, Chennai, Kolkata and other cities.",
                "/gold-rate",
            )
            .with_faqs(faq::items(faq::GOLD));
            Ok(page(site, &meta, &content))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_query_ignores_blank() {
        assert_eq!(CityQuery::default().city(), None);
        assert_eq!(
            CityQuery {
                city: Some("  ".to_string())
            }
            .city(),
            None
        );
        assert_eq!(
            CityQuery {
                city: Some(" Mumbai ".to_string())
            }
            .city(),
            Some("Mumbai")
        );
    }

    #[test]
    fn test_city_path_encodes() {
        assert_eq!(
            city_path("/fuel-price", "New Delhi"),
            "/fuel-price?city=New%20Delhi"
        );
    }
}
