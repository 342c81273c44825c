//! Content API provider for IPO documents.
//!
//! The upstream is a headless CMS exposing an `ipos` collection. A document is looked
//! up by slug through the collection query endpoint:
//!
//! ```text
//! GET {base}/api/ipos?where[slug][equals]={slug}&limit=1&depth=1
//! ```
//!
//! which answers with a `{ "docs": [...] }` envelope. Deployments that proxy a single
//! document and answer with the bare object are accepted too.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::IpoDocument;
use crate::provider::IpoDataProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "IPO_API";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Longest slug the upstream accepts
const MAX_SLUG_LEN: usize = 120;

/// HTTP provider for the IPO content API.
///
/// # Example
///
/// ```ignore
/// use marketdesk_market_data::IpoApiProvider;
///
/// let provider = IpoApiProvider::new("https://cms.example.com");
/// let document = provider.fetch_ipo("acme-ipo").await?;
/// ```
pub struct IpoApiProvider {
    client: Client,
    base_url: String,
}

impl IpoApiProvider {
    /// Create a provider for the API at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a provider for the API at `base_url`; requests taking longer than
    /// `timeout` fail with [`MarketDataError::Timeout`].
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Slugs are lowercase ASCII letters, digits and hyphens.
    pub(crate) fn is_valid_slug(slug: &str) -> bool {
        !slug.is_empty()
            && slug.len() <= MAX_SLUG_LEN
            && slug
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }

    fn document_url(&self, slug: &str) -> String {
        format!(
            "{}/api/ipos?where[slug][equals]={}&limit=1&depth=1",
            self.base_url,
            urlencoding::encode(slug)
        )
    }

    /// Pulls the document out of a collection envelope or accepts a bare object.
    fn extract_document(body: Value) -> Option<IpoDocument> {
        match body {
            Value::Object(mut map) => match map.remove("docs") {
                Some(Value::Array(docs)) => docs.into_iter().next().map(IpoDocument::from_value),
                Some(_) => None,
                None => Some(IpoDocument::from_value(Value::Object(map))),
            },
            _ => None,
        }
    }

    fn transport_error(error: reqwest::Error) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(error)
        }
    }
}

#[async_trait]
impl IpoDataProvider for IpoApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_ipo(&self, slug: &str) -> Result<IpoDocument, MarketDataError> {
        if !Self::is_valid_slug(slug) {
            return Err(MarketDataError::NotFound(slug.to_string()));
        }

        let url = self.document_url(slug);
        debug!("Fetching IPO document '{}' from {}", slug, url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound(slug.to_string()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let bytes = response.bytes().await.map_err(Self::transport_error)?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        Self::extract_document(body).ok_or_else(|| MarketDataError::NotFound(slug.to_string()))
    }
}
