//! Core error types for the MarketDesk application.

use thiserror::Error;

use marketdesk_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
///
/// Missing or malformed fields inside an upstream document are never errors; they are
/// replaced by placeholders during mapping. Errors only describe a record that could
/// not be obtained at all, or invalid calculator input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

impl Error {
    /// True when the record does not exist, whether the core or the upstream said so.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::MarketData(e) => e.is_not_found(),
            _ => false,
        }
    }
}

/// Rejected calculator input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_covers_upstream() {
        assert!(Error::NotFound("acme-ipo".to_string()).is_not_found());
        let upstream = MarketDataError::NotFound("acme-ipo".to_string());
        assert!(Error::MarketData(upstream).is_not_found());
        assert!(!Error::MarketData(MarketDataError::Timeout {
            provider: "IPO_API".to_string()
        })
        .is_not_found());
        assert!(!Error::Calculation("overflow".to_string()).is_not_found());
    }

    #[test]
    fn test_validation_display() {
        let err = Error::Validation(ValidationError::InvalidInput(
            "Tenure must be at least one month".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Input validation failed: Invalid input: Tenure must be at least one month"
        );
    }
}
