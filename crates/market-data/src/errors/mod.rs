//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every failure a provider can surface while fetching an
//! upstream document. Callers rendering pages only need to distinguish "the record does
//! not exist" from everything else, see [`MarketDataError::is_not_found`].

use thiserror::Error;

/// Errors that can occur while fetching upstream documents.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested document does not exist upstream (HTTP 404, empty result set,
    /// or a slug that can never match).
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered 200 but the body could not be decoded as JSON.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the body
        provider: String,
        /// Decoder error
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the error means the record does not exist, as opposed to
    /// the upstream being unavailable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_found() {
        let error = MarketDataError::NotFound("acme-ipo".to_string());
        assert!(error.is_not_found());
    }

    #[test]
    fn test_transient_errors_are_not_not_found() {
        let error = MarketDataError::Timeout {
            provider: "IPO_API".to_string(),
        };
        assert!(!error.is_not_found());

        let error = MarketDataError::RateLimited {
            provider: "IPO_API".to_string(),
        };
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::NotFound("acme-ipo".to_string());
        assert_eq!(format!("{}", error), "Document not found: acme-ipo");

        let error = MarketDataError::RateLimited {
            provider: "IPO_API".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: IPO_API");

        let error = MarketDataError::ProviderError {
            provider: "IPO_API".to_string(),
            message: "HTTP 502 Bad Gateway".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: IPO_API - HTTP 502 Bad Gateway"
        );

        let error = MarketDataError::InvalidResponse {
            provider: "IPO_API".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid response from IPO_API: expected value at line 1 column 1"
        );
    }
}
