use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

const DEFAULT_IPO_API_URL: &str = "http://localhost:3000";
const DEFAULT_SITE_URL: &str = "http://localhost:8080";
const DEFAULT_REFERRAL_URL: &str = "https://example.com/open-demat-account";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Base URL of the IPO content API, without a trailing slash
    pub ipo_api_url: String,
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
    /// Public base URL used for canonical links, without a trailing slash
    pub site_url: String,
    pub referral_url: String,
    /// `Cache-Control: max-age` for rendered pages, seconds
    pub revalidate_secs: u64,
    pub static_dir: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            ipo_api_url: DEFAULT_IPO_API_URL.to_string(),
            upstream_timeout: Duration::from_millis(8000),
            request_timeout: Duration::from_millis(30000),
            cors_allow: vec!["*".to_string()],
            site_url: DEFAULT_SITE_URL.to_string(),
            referral_url: DEFAULT_REFERRAL_URL.to_string(),
            revalidate_secs: 300,
            static_dir: "static".to_string(),
            log_format: "text".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Milliseconds from `raw`. Missing, unparsable and zero values fall back to `default`.
fn parse_millis(raw: Option<String>, default: Duration) -> Duration {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
        .unwrap_or(default)
}

fn env_millis(key: &str, default: Duration) -> Duration {
    parse_millis(std::env::var(key).ok(), default)
}

impl Config {
    /// Reads `MD_*` variables, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = env_or("MD_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid MD_LISTEN_ADDR")?;
        let cors_allow = env_or("MD_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let revalidate_secs = std::env::var("MD_REVALIDATE_SECS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.revalidate_secs);

        Ok(Self {
            listen_addr,
            ipo_api_url: env_or("MD_IPO_API_URL", DEFAULT_IPO_API_URL)
                .trim_end_matches('/')
                .to_string(),
            upstream_timeout: env_millis("MD_UPSTREAM_TIMEOUT_MS", defaults.upstream_timeout),
            request_timeout: env_millis("MD_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            cors_allow,
            site_url: env_or("MD_SITE_URL", DEFAULT_SITE_URL)
                .trim_end_matches('/')
                .to_string(),
            referral_url: env_or("MD_REFERRAL_URL", DEFAULT_REFERRAL_URL),
            revalidate_secs,
            static_dir: env_or("MD_STATIC_DIR", &defaults.static_dir),
            log_format: env_or("MD_LOG_FORMAT", &defaults.log_format),
        })
    }
}
