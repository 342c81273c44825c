//! Upstream provider trait definitions.
//!
//! This module defines the `IpoDataProvider` trait that every source of IPO
//! documents implements.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::IpoDocument;

/// Trait for IPO document providers.
///
/// Implement this trait to add a new upstream source. Providers return the raw,
/// loosely-typed [`IpoDocument`]; turning it into something displayable is the
/// caller's concern.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use marketdesk_market_data::{IpoDataProvider, IpoDocument, MarketDataError};
///
/// struct FixtureProvider {
///     document: IpoDocument,
/// }
///
/// #[async_trait]
/// impl IpoDataProvider for FixtureProvider {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn fetch_ipo(&self, _slug: &str) -> Result<IpoDocument, MarketDataError> {
///         Ok(self.document.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait IpoDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "IPO_API". Used for logging and error
    /// messages.
    fn id(&self) -> &'static str;

    /// Fetch one IPO document by its slug.
    ///
    /// # Returns
    ///
    /// The document on success. [`MarketDataError::NotFound`] when no record has
    /// this slug; any other variant when the upstream could not be reached or
    /// answered with something unusable.
    async fn fetch_ipo(&self, slug: &str) -> Result<IpoDocument, MarketDataError>;
}
