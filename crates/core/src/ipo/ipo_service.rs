use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use marketdesk_market_data::IpoDataProvider;

use super::ipo_mapper::map_document_to_view_model;
use super::ipo_model::IpoViewModel;
use super::ipo_traits::IpoServiceTrait;
use crate::errors::Result;

pub struct IpoService {
    provider: Arc<dyn IpoDataProvider>,
}

impl IpoService {
    pub fn new(provider: Arc<dyn IpoDataProvider>) -> Self {
        IpoService { provider }
    }
}

#[async_trait]
impl IpoServiceTrait for IpoService {
    async fn get_ipo(&self, slug: &str) -> Result<IpoViewModel> {
        let document = self.provider.fetch_ipo(slug).await?;
        debug!(
            "Fetched IPO document '{}' from {}",
            slug,
            self.provider.id()
        );

        let mut view = map_document_to_view_model(&document);
        if view.slug.is_empty() {
            view.slug = slug.to_string();
        }
        Ok(view)
    }
}
