use async_trait::async_trait;

use crate::errors::Result;
use crate::ipo::ipo_model::IpoViewModel;

/// Trait for IPO detail lookups
#[async_trait]
pub trait IpoServiceTrait: Send + Sync {
    /// Fetches the upstream record for `slug` and maps it for display.
    ///
    /// An unknown slug, as well as any upstream failure, surfaces as an error; callers
    /// render both as a not-found page.
    async fn get_ipo(&self, slug: &str) -> Result<IpoViewModel>;
}
