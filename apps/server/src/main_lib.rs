use std::sync::Arc;

use crate::config::Config;
use marketdesk_core::{
    ipo::{IpoService, IpoServiceTrait},
    listings::{ListingService, ListingServiceTrait, StaticListingRepository},
    rates::{RateService, RateServiceTrait, StaticRateRepository},
};
use marketdesk_market_data::{IpoApiProvider, IpoDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Site-wide values the page renderers need.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_url: String,
    pub referral_url: String,
    pub revalidate_secs: u64,
}

impl SiteSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_url: config.site_url.clone(),
            referral_url: config.referral_url.clone(),
            revalidate_secs: config.revalidate_secs,
        }
    }

    /// Absolute URL for a site path
    pub fn url(&self, path: &str) -> String {
        if path == "/" {
            format!("{}/", self.site_url)
        } else {
            format!("{}{}", self.site_url, path)
        }
    }
}

pub struct AppState {
    pub ipo_service: Arc<dyn IpoServiceTrait + Send + Sync>,
    pub listing_service: Arc<dyn ListingServiceTrait + Send + Sync>,
    pub rate_service: Arc<dyn RateServiceTrait + Send + Sync>,
    pub site: SiteSettings,
}

impl AppState {
    /// Wires the services around an IPO provider. The listing and rate services use
    /// the bundled data.
    pub fn with_provider(provider: Arc<dyn IpoDataProvider>, config: &Config) -> Arc<Self> {
        Arc::new(Self {
            ipo_service: Arc::new(IpoService::new(provider)),
            listing_service: Arc::new(ListingService::new(Arc::new(
                StaticListingRepository::new(),
            ))),
            rate_service: Arc::new(RateService::new(Arc::new(StaticRateRepository::new()))),
            site: SiteSettings::from_config(config),
        })
    }
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider =
        IpoApiProvider::with_timeout(config.ipo_api_url.as_str(), config.upstream_timeout);
    tracing::info!(
        "IPO API in use: {} (timeout {:?})",
        provider.base_url(),
        config.upstream_timeout
    );
    Ok(AppState::with_provider(Arc::new(provider), config))
}
