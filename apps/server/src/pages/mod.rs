//! Server-rendered HTML pages.
//!
//! Every page shares the layout in [`html`]: SEO tags, JSON-LD, navigation, the
//! brokerage CTA and an FAQ block.

use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use marketdesk_core::errors::Result as CoreResult;

use crate::main_lib::{AppState, SiteSettings};

mod calculators;
mod faq;
mod format;
mod home;
pub mod html;
mod ipo;
mod listings;
pub mod not_found;
mod rates;
mod seo;

/// Runs a page builder and turns failures into the 404 or 500 page.
fn render_or_error<F>(site: &SiteSettings, path: &str, build: F) -> Response
where
    F: FnOnce() -> CoreResult<html::HtmlPage>,
{
    match build() {
        Ok(page) => page.into_response(),
        Err(e) if e.is_not_found() => {
            tracing::warn!("Page {} not found: {}", path, e);
            not_found::page(site, path).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to render {}: {}", path, e);
            not_found::error_page(site, path).into_response()
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home::home))
        .route("/ipo", get(ipo::ipo_calendar))
        .route("/ipo/{slug}", get(ipo::ipo_detail))
        .route("/ipo-gmp", get(listings::ipo_gmp))
        .route("/buyback", get(listings::buybacks))
        .route("/rights-issue", get(listings::rights_issues))
        .route("/ncd", get(listings::ncd_issues))
        .route("/fd-rates", get(rates::fd_rates))
        .route("/rd-rates", get(rates::rd_rates))
        .route("/fuel-price", get(rates::fuel_prices))
        .route("/gold-rate", get(rates::gold_rates))
        .route("/calculators", get(calculators::index))
        .route("/calculators/{kind}", get(calculators::calculator))
}
